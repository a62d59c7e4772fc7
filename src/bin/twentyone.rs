//! Command-line blackjack against a scripted dealer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use twentyone::{
    BetError, Currency, DealError, Game, GameOptions, GameState, Hand, HandOutcome, Player,
    RoundResult, Visibility,
};

/// Play blackjack at the command line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of 52-card decks shuffled together.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,

    /// Shuffle a new deck before a round when fewer cards remain.
    #[arg(long, default_value_t = 60)]
    reshuffle_below: usize,

    /// Starting balance.
    #[arg(long, default_value = "500")]
    balance: String,

    /// Currency symbol shown before amounts.
    #[arg(long, default_value = "£")]
    currency: String,

    /// Decimal places for amounts.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=6))]
    precision: u8,

    /// Seed for the shuffle (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Player name (prompted when omitted).
    #[arg(long)]
    name: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_options(args: &Args) -> Result<GameOptions> {
    let currency = Currency::new(args.currency.as_str(), args.precision);
    let balance = currency
        .parse(&args.balance)
        .with_context(|| format!("invalid starting balance {:?}", args.balance))?;
    anyhow::ensure!(balance > 0, "starting balance must be greater than zero");

    Ok(GameOptions::default()
        .with_decks(args.decks)
        .with_reshuffle_below(args.reshuffle_below)
        .with_starting_balance(balance)
        .with_currency(currency))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let options = build_options(&args)?;
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, decks = options.decks, "starting session");

    print_welcome_message(&options.quit_keyword);

    let name = match args.name {
        Some(name) => {
            Player::validate_name(&name, options.max_name_len)?;
            name
        }
        None => match prompt_name(&options)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let mut game = Game::new(options, &name, seed).context("failed to set up the table")?;

    while !game.is_over() {
        if game.check_and_reshuffle()? {
            print_banner("NEW ROUND - NEW DECK!");
        } else {
            print_banner("NEW ROUND");
        }

        if !play_round(&mut game)? {
            return Ok(());
        }
        game.clear_round();
    }

    print_game_over_message(game.player().name());
    Ok(())
}

/// Plays one round. Returns `false` if the player quit.
fn play_round(game: &mut Game) -> Result<bool> {
    game.start_betting();
    if !place_bet(game)? {
        return Ok(false);
    }

    match game.deal() {
        Err(DealError::NotEnoughCards) => {
            print_banner("NEW DECK!");
            game.reshuffle()?;
            game.deal()?;
        }
        result => result?,
    }
    print_hand(game.dealer_hand(), &game.options.currency, None);
    print_hand(game.player_hand(), &game.options.currency, Some(game.player_hand().wager()));

    if let Some(result) = game.settle_naturals()? {
        print_hand(game.dealer_hand(), &game.options.currency, None);
        print_result(&result, &game.options.currency);
        return Ok(true);
    }

    while game.state() == GameState::PlayerTurn {
        let Some(hit) = prompt_action(&game.options.quit_keyword)? else {
            return Ok(false);
        };
        if hit {
            game.hit()?;
        } else {
            game.stand()?;
        }
        print_hand(game.player_hand(), &game.options.currency, Some(game.player_hand().wager()));
    }

    if game.state() == GameState::DealerTurn {
        if let Some(value) = game.player_hand().best_value(Visibility::Revealed) {
            println!("Your score = {value}");
        }
        game.dealer_play()?;
        print_hand(game.dealer_hand(), &game.options.currency, None);
    }

    let result = game.showdown()?;
    print_result(&result, &game.options.currency);
    Ok(true)
}

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads one answer, or `None` if the player typed the quit keyword or
/// closed the input.
fn prompt(prompt: &str, quit_keyword: &str) -> Result<Option<String>> {
    Ok(prompt_line(prompt)?.filter(|input| !input.trim().eq_ignore_ascii_case(quit_keyword)))
}

fn prompt_name(options: &GameOptions) -> Result<Option<String>> {
    loop {
        let Some(name) = prompt("\nEnter your name: ", &options.quit_keyword)? else {
            return Ok(None);
        };
        match Player::validate_name(&name, options.max_name_len) {
            Ok(()) => return Ok(Some(name)),
            Err(_) => println!(
                "Invalid name (Max length = {} characters)",
                options.max_name_len
            ),
        }
    }
}

/// Prompts until a valid bet is placed. Returns `false` if the player quit.
fn place_bet(game: &mut Game) -> Result<bool> {
    let currency = game.options.currency.clone();
    loop {
        let balance = currency.format(game.player().balance());
        let Some(input) = prompt(
            &format!("\nBalance: {balance}. Place your bet: "),
            &game.options.quit_keyword,
        )?
        else {
            return Ok(false);
        };

        let amount = match currency.parse(&input) {
            Ok(amount) => amount,
            Err(err) => {
                println!("Invalid bet: {err}");
                continue;
            }
        };

        match game.bet(amount) {
            Ok(()) => return Ok(true),
            Err(BetError::ZeroBet) => println!("Invalid bet: must be greater than zero"),
            Err(BetError::InsufficientFunds) => {
                println!("Invalid bet: you only have {balance}");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reads hit (`true`) or stand (`false`), or `None` on quit.
fn prompt_action(quit_keyword: &str) -> Result<Option<bool>> {
    loop {
        let Some(input) = prompt("\nHit [h] or Stand [s]: ", quit_keyword)? else {
            return Ok(None);
        };
        match input.trim().to_lowercase().as_str() {
            "h" => return Ok(Some(true)),
            "s" => return Ok(Some(false)),
            _ => println!("Invalid action: please enter 'h' to hit or 's' to stand..."),
        }
    }
}

fn print_hand(hand: &Hand, currency: &Currency, wager: Option<usize>) {
    println!("\n{}'s hand", hand.role().label());
    for (index, card) in hand.cards().iter().enumerate() {
        println!("Card {index}: {card}");
    }

    let labels = hand.value_labels();
    if hand.is_bust() {
        println!("Value: {} (bust)", labels.join(" or "));
    } else {
        println!("Value: {}", labels.join(" or "));
    }

    if let Some(wager) = wager {
        println!("Bet: {}", currency.format(wager));
    }
}

fn print_result(result: &RoundResult, currency: &Currency) {
    let message = match result.outcome {
        HandOutcome::Natural => "Blackjack! You win with a natural.",
        HandOutcome::DealerNatural => "The dealer has a natural. You lose.",
        HandOutcome::NaturalPush => "You both have naturals. It's a push.",
        HandOutcome::Bust => "You've gone bust!",
        HandOutcome::Win => "You win!",
        HandOutcome::Push => "It's a push.",
        HandOutcome::Lose => "The dealer wins.",
    };
    println!("\n{message}");

    if result.payout > 0 {
        println!("Paid out: {}", currency.format(result.payout));
    }
    println!("Balance: {}", currency.format(result.balance));
}

fn print_welcome_message(quit_keyword: &str) {
    println!(
        "\n---------------------\
         \nLET'S PLAY BLACKJACK!\
         \n---------------------\
         \n\nType '{quit_keyword}' at any time to exit."
    );
}

fn print_banner(title: &str) {
    let rule = "-".repeat(title.chars().count());
    println!("\n{rule}\n{title}\n{rule}");
}

fn print_game_over_message(name: &str) {
    println!(
        "\n\n---------\
         \nGAME OVER\
         \n---------\
         \nSorry {name}, looks like you're out of money...\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_arguments() {
        let args = Args::parse_from([
            "twentyone",
            "--decks",
            "2",
            "--balance",
            "100.50",
            "--currency",
            "$",
            "--reshuffle-below",
            "20",
        ]);
        let options = build_options(&args).expect("options should build");
        assert_eq!(options.decks, 2);
        assert_eq!(options.starting_balance, 10_050);
        assert_eq!(options.reshuffle_below, 20);
        assert_eq!(options.currency.symbol, "$");
    }

    #[test]
    fn rejects_zero_decks() {
        assert!(Args::try_parse_from(["twentyone", "--decks", "0"]).is_err());
    }

    #[test]
    fn rejects_bad_balance() {
        let args = Args::parse_from(["twentyone", "--balance", "lots"]);
        let err = build_options(&args).unwrap_err();
        assert!(
            err.to_string().contains("starting balance"),
            "unexpected error: {err}"
        );
    }
}
