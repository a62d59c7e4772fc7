//! Game integration tests.

use twentyone::{
    ActionError, BetError, Card, Currency, DECK_SIZE, DealError, DealerHand, Deck, DeckError,
    Game, GameOptions, GameState, HandOutcome, Player, PlayerError, PlayerHand, Rank,
    ReshuffleError, RoundingMode, SettleError, SetupError, ShowdownError, Suit, Visibility,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank, 1)
}

const fn ten(suit: Suit) -> Card {
    card(suit, Rank::Ten)
}

/// Builds a game whose deck deals `draws` in order.
///
/// The initial deal goes player, dealer (hole), player, dealer.
fn game_with_draws(draws: Vec<Card>, balance: usize) -> Game {
    let player = Player::new("Ada", balance, 12).unwrap();
    Game::with_deck(GameOptions::default(), player, Deck::stacked(draws))
}

fn start_round(game: &mut Game, wager: usize) {
    game.start_betting();
    game.bet(wager).unwrap();
    game.deal().unwrap();
}

fn hands(player_cards: &[Card], dealer_cards: &[Card], wager: usize) -> (PlayerHand, DealerHand) {
    let mut owner = Player::new("Ada", wager, 12).unwrap();
    let mut player = PlayerHand::new();
    owner.place_bet(&mut player, wager).unwrap();
    for &card in player_cards {
        player.add_card(card).unwrap();
    }

    let mut dealer = DealerHand::new();
    for &card in dealer_cards {
        dealer.add_card(card).unwrap();
    }
    (player, dealer)
}

#[test]
fn player_natural_pays_two_and_a_half_times() {
    let mut game = game_with_draws(
        vec![
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::King),
            card(Suit::Hearts, Rank::Seven),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    assert_eq!(game.player().balance(), 49_000);
    assert_eq!(game.state(), GameState::Naturals);

    let result = game.settle_naturals().unwrap().expect("player natural");
    assert_eq!(result.outcome, HandOutcome::Natural);
    assert_eq!(result.payout, 2_500);
    assert_eq!(result.net, 1_500);
    assert_eq!(result.player_value, Some(21));
    assert_eq!(result.dealer_value, Some(16));
    assert_eq!(game.player().balance(), 51_500);
    assert_eq!(game.state(), GameState::Settled);
    assert!(game.dealer_hand().is_hole_revealed());

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn dealer_natural_takes_the_wager() {
    let mut game = game_with_draws(
        vec![
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::King),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    let result = game.settle_naturals().unwrap().expect("dealer natural");
    assert_eq!(result.outcome, HandOutcome::DealerNatural);
    assert_eq!(result.payout, 0);
    assert_eq!(game.player().balance(), 49_000);
    assert!(game.dealer_hand().is_hole_revealed());
}

#[test]
fn double_natural_is_a_push() {
    let mut game = game_with_draws(
        vec![
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Hearts, Rank::King),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    let result = game.settle_naturals().unwrap().expect("both natural");
    assert_eq!(result.outcome, HandOutcome::NaturalPush);
    assert_eq!(result.payout, 1_000);
    assert_eq!(game.player().balance(), 50_000);
}

#[test]
fn player_stands_on_eighteen_and_dealer_draws_to_nineteen() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Hearts, Rank::Four),
            ten(Suit::Diamonds),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    assert_eq!(game.settle_naturals().unwrap(), None);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.dealer_hand().value_labels(), vec!["4 + *-*".to_string()]);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![ten(Suit::Diamonds)]);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, HandOutcome::Lose);
    assert_eq!(result.payout, 0);
    assert_eq!(result.net, -1_000);
    assert_eq!(result.player_value, Some(18));
    assert_eq!(result.dealer_value, Some(19));
    assert_eq!(result.balance, 49_000);
    assert_eq!(game.player().balance(), 49_000);
}

#[test]
fn player_wins_when_dealer_busts() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            ten(Suit::Hearts),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Diamonds, Rank::King),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    assert_eq!(game.settle_naturals().unwrap(), None);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.payout, 2_000);
    assert_eq!(result.dealer_value, None);
    assert_eq!(game.player().balance(), 51_000);
}

#[test]
fn equal_values_push() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            ten(Suit::Hearts),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Hearts, Rank::Eight),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    assert_eq!(game.settle_naturals().unwrap(), None);
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.payout, 1_000);
    assert_eq!(game.player().balance(), 50_000);
}

#[test]
fn player_bust_forfeits_without_dealer_play() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Diamonds, Rank::Two),
        ],
        50_000,
    );

    start_round(&mut game, 1_000);
    assert_eq!(game.settle_naturals().unwrap(), None);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Suit::Diamonds, Rank::King));
    assert!(game.player_hand().is_bust());
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, HandOutcome::Bust);
    assert_eq!(result.payout, 0);
    assert_eq!(result.player_value, None);
    assert_eq!(result.dealer_value, None);
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.player().balance(), 49_000);
}

#[test]
fn hitting_keeps_the_turn_until_the_hand_stops() {
    let mut game = game_with_draws(
        vec![
            card(Suit::Spades, Rank::Two),
            ten(Suit::Hearts),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Diamonds, Rank::Ace),
        ],
        50_000,
    );

    start_round(&mut game, 500);
    assert_eq!(game.settle_naturals().unwrap(), None);

    game.hit().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.player_hand().totals(Visibility::Public),
        vec![9]
    );

    game.hit().unwrap();
    assert_eq!(game.player_hand().best_value(Visibility::Public), Some(20));
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.payout, 1_000);
}

#[test]
fn reaching_twenty_one_ends_the_turn() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            ten(Suit::Hearts),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Six),
        ],
        50_000,
    );

    start_round(&mut game, 500);
    assert_eq!(game.settle_naturals().unwrap(), None);
    game.hit().unwrap();
    assert!(!game.player_hand().is_natural());
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn bet_errors() {
    let mut game = game_with_draws(Vec::new(), 500);

    assert_eq!(game.bet(100).unwrap_err(), BetError::InvalidState);

    game.start_betting();
    assert_eq!(game.bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.bet(600).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.player().balance(), 500);

    game.bet(500).unwrap();
    assert_eq!(game.player().balance(), 0);
    assert_eq!(game.bet(1).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_errors() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            ten(Suit::Hearts),
            ten(Suit::Clubs),
        ],
        500,
    );

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.start_betting();
    assert_eq!(game.deal().unwrap_err(), DealError::NoBet);

    game.bet(100).unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), 3);
    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.player_hand().is_empty());
}

#[test]
fn short_deck_keeps_the_bet_for_a_fresh_deal() {
    let mut game = game_with_draws(vec![ten(Suit::Spades), ten(Suit::Hearts)], 500);
    game.start_betting();
    game.bet(100).unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);

    game.reshuffle().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::Naturals);
    assert_eq!(game.player_hand().wager(), 100);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.player().balance(), 400);
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
}

#[test]
fn actions_outside_player_turn_fail() {
    let mut game = game_with_draws(Vec::new(), 500);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.settle_naturals().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn dealer_out_of_cards_is_reported() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::Three),
        ],
        500,
    );

    start_round(&mut game, 100);
    assert_eq!(game.settle_naturals().unwrap(), None);
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::NoCards);
}

#[test]
fn reshuffle_when_below_threshold() {
    let mut game = game_with_draws(vec![ten(Suit::Hearts); 10], 500);
    game.options.reshuffle_below = 20;

    assert!(game.needs_reshuffle());
    assert!(game.check_and_reshuffle().unwrap());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(!game.check_and_reshuffle().unwrap());

    game.options.reshuffle_below = DECK_SIZE + 1;
    start_round(&mut game, 100);
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
    assert_eq!(
        game.check_and_reshuffle().unwrap_err(),
        ReshuffleError::InvalidState
    );
}

#[test]
fn clear_round_resets_hands() {
    let mut game = game_with_draws(
        vec![
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::King),
            card(Suit::Hearts, Rank::Seven),
        ],
        500,
    );

    start_round(&mut game, 100);
    game.settle_naturals().unwrap();
    game.clear_round();

    assert_eq!(game.state(), GameState::WaitingForBet);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.player_hand().wager(), 0);
}

#[test]
fn losing_everything_ends_the_game() {
    let mut game = game_with_draws(
        vec![
            ten(Suit::Spades),
            ten(Suit::Hearts),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Hearts, Rank::Nine),
        ],
        500,
    );

    assert!(!game.is_over());
    start_round(&mut game, 500);
    assert_eq!(game.settle_naturals().unwrap(), None);
    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.showdown().unwrap().outcome, HandOutcome::Lose);
    game.clear_round();
    assert!(game.is_over());
}

#[test]
fn setup_errors() {
    assert_eq!(
        Game::new(GameOptions::default().with_decks(0), "Ada", 1).unwrap_err(),
        SetupError::Deck(DeckError::InvalidDeckCount)
    );
    assert_eq!(
        Game::new(GameOptions::default(), "", 1).unwrap_err(),
        SetupError::Player(PlayerError::InvalidName { max: 12 })
    );
    assert_eq!(
        Game::new(GameOptions::default(), "Bartholomew Jr", 1).unwrap_err(),
        SetupError::Player(PlayerError::InvalidName { max: 12 })
    );

    let game = Game::new(GameOptions::default().with_decks(2), "Bartholomew", 1).unwrap();
    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE);
    assert_eq!(game.player().name(), "Bartholomew");
}

#[test]
fn seeded_session_keeps_the_books() {
    let options = GameOptions::default().with_decks(2).with_reshuffle_below(20);
    let mut game = Game::new(options, "Ada", 2024).unwrap();

    for _ in 0..200 {
        if game.is_over() {
            break;
        }
        game.check_and_reshuffle().unwrap();

        let before = game.player().balance();
        let wager = before.min(1_000);
        start_round(&mut game, wager);

        let result = if let Some(result) = game.settle_naturals().unwrap() {
            result
        } else {
            while game.state() == GameState::PlayerTurn {
                if game.player_hand().best_value(Visibility::Public).unwrap_or(21) < 17 {
                    game.hit().unwrap();
                } else {
                    game.stand().unwrap();
                }
            }
            if game.state() == GameState::DealerTurn {
                game.dealer_play().unwrap();
            }
            game.showdown().unwrap()
        };

        assert_eq!(result.wager, wager);
        assert_eq!(result.balance, before - wager + result.payout);
        assert_eq!(game.player().balance(), result.balance);
        assert!(matches!(result.payout, 0) || result.payout >= wager);
        game.clear_round();
    }
}

#[test]
fn natural_settlement_rules() {
    let options = GameOptions::default();
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Hearts, Rank::King);
    let nine = card(Suit::Clubs, Rank::Nine);

    let (player, dealer) = hands(&[ace, king], &[nine, nine], 1_000);
    let settlement = dealer.settle_naturals(&player, &options).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::Natural);
    assert_eq!(settlement.payout, 2_500);

    let (player, dealer) = hands(&[nine, nine], &[ace, king], 1_000);
    let settlement = dealer.settle_naturals(&player, &options).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::DealerNatural);
    assert_eq!(settlement.payout, 0);

    let (player, dealer) = hands(&[ace, king], &[king, ace], 1_000);
    let settlement = dealer.settle_naturals(&player, &options).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::NaturalPush);
    assert_eq!(settlement.payout, 1_000);

    let (player, dealer) = hands(&[nine, king], &[nine, king], 1_000);
    assert_eq!(dealer.settle_naturals(&player, &options), None);
}

#[test]
fn natural_payout_rounding() {
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Hearts, Rank::King);
    let nine = card(Suit::Clubs, Rank::Nine);
    let (player, dealer) = hands(&[ace, king], &[nine, nine], 1_001);

    let down = GameOptions::default();
    assert_eq!(dealer.settle_naturals(&player, &down).unwrap().payout, 2_502);

    let up = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    assert_eq!(dealer.settle_naturals(&player, &up).unwrap().payout, 2_503);

    let six_to_five = GameOptions::default().with_blackjack_pays(1.2);
    assert_eq!(
        dealer.settle_naturals(&player, &six_to_five).unwrap().payout,
        2_202
    );
}

#[test]
fn final_settlement_requires_stopped_hands() {
    let ten_card = ten(Suit::Spades);
    let eight = card(Suit::Hearts, Rank::Eight);
    let six = card(Suit::Clubs, Rank::Six);
    let king = card(Suit::Diamonds, Rank::King);

    let (player, dealer) = hands(&[ten_card, eight], &[ten_card, six], 1_000);
    assert_eq!(dealer.settle_bet(&player), Err(SettleError::PlayerActive));

    let (mut player, dealer) = hands(&[ten_card, eight], &[ten_card, six], 1_000);
    player.stand().unwrap();
    assert_eq!(dealer.settle_bet(&player), Err(SettleError::DealerActive));

    let (player, dealer) = hands(&[ten_card, six, king], &[ten_card, six], 1_000);
    let settlement = dealer.settle_bet(&player).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::Bust);
    assert_eq!(settlement.payout, 0);

    let (mut player, dealer) = hands(&[ten_card, eight], &[ten_card, six, king], 1_000);
    player.stand().unwrap();
    let settlement = dealer.settle_bet(&player).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::Win);
    assert_eq!(settlement.payout, 2_000);
}

#[test]
fn huge_wagers_pay_out_without_overflow() {
    let huge = usize::MAX / 2 + 10;
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Hearts, Rank::King);
    let nine = card(Suit::Clubs, Rank::Nine);
    let eight = card(Suit::Diamonds, Rank::Eight);

    let (mut player, mut dealer) = hands(&[king, nine], &[king, eight], huge);
    player.stand().unwrap();
    dealer.play_out(&mut Deck::stacked(Vec::new()), 17).unwrap();
    let settlement = dealer.settle_bet(&player).unwrap();
    assert_eq!(settlement.outcome, HandOutcome::Win);
    assert_eq!(settlement.payout, usize::MAX);

    let (player, dealer) = hands(&[ace, king], &[nine, nine], huge);
    let settlement = dealer
        .settle_naturals(&player, &GameOptions::default())
        .unwrap();
    assert_eq!(settlement.outcome, HandOutcome::Natural);
    assert_eq!(settlement.payout, usize::MAX);

    let mut game = game_with_draws(vec![ace, nine, king, eight], huge);
    start_round(&mut game, huge);
    let result = game.settle_naturals().unwrap().expect("player natural");
    assert_eq!(result.payout, usize::MAX);
    assert_eq!(result.balance, usize::MAX);
    assert!(result.net > 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_reshuffle_below(30)
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Nearest)
        .with_dealer_stands_on(18)
        .with_starting_balance(1_000)
        .with_currency(Currency::new("$", 0))
        .with_quit_keyword("exit")
        .with_max_name_len(8);

    assert_eq!(options.decks, 4);
    assert_eq!(options.reshuffle_below, 30);
    assert!((options.blackjack_pays - 1.2).abs() < f64::EPSILON);
    assert_eq!(options.rounding_blackjack, RoundingMode::Nearest);
    assert_eq!(options.dealer_stands_on, 18);
    assert_eq!(options.starting_balance, 1_000);
    assert_eq!(options.currency, Currency::new("$", 0));
    assert_eq!(options.quit_keyword, "exit");
    assert_eq!(options.max_name_len, 8);
}
