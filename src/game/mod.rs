//! Round controller and session state.

use crate::card::Visibility;
use crate::deck::Deck;
use crate::error::{ReshuffleError, SetupError};
use crate::hand::{DealerHand, PlayerHand};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{RoundResult, Settlement};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack table with one player and a scripted dealer.
///
/// The game owns the deck, the player and both hands, and walks a round
/// through [`GameState`]: bet, deal, naturals, player turn, dealer turn,
/// showdown.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// The player and their balance.
    player: Player,
    /// Player's hand for the current round.
    player_hand: PlayerHand,
    /// Dealer's hand for the current round.
    dealer_hand: DealerHand,
}

impl Game {
    /// Creates a game for a new player with the starting balance from
    /// `options` and a deck shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.decks` is zero or the name is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), "Ada", 42).unwrap();
    /// assert_eq!(game.player().balance(), 50_000);
    /// ```
    pub fn new(options: GameOptions, name: &str, seed: u64) -> Result<Self, SetupError> {
        let deck = Deck::new(options.decks, seed)?;
        let player = Player::new(name, options.starting_balance, options.max_name_len)?;
        Ok(Self::with_deck(options, player, deck))
    }

    /// Creates a game from an existing player and deck.
    #[must_use]
    pub const fn with_deck(options: GameOptions, player: Player, deck: Deck) -> Self {
        Self {
            options,
            deck,
            state: GameState::WaitingForBet,
            player,
            player_hand: PlayerHand::new(),
            dealer_hand: DealerHand::new(),
        }
    }

    /// Replaces the deck with fresh shuffled sets.
    ///
    /// Allowed until the initial cards are dealt, so a bet that failed to
    /// deal with [`DealError::NotEnoughCards`](crate::error::DealError::NotEnoughCards)
    /// can be dealt again from a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are already out for this round.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if !matches!(
            self.state,
            GameState::WaitingForBet | GameState::Betting | GameState::Dealing
        ) {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck.new_deck();
        tracing::info!(cards = self.deck.len(), "new deck shuffled");
        Ok(())
    }

    /// Returns whether fewer cards remain than `reshuffle_below`.
    pub fn needs_reshuffle(&self) -> bool {
        self.deck.len() < self.options.reshuffle_below
    }

    /// Checks the remaining cards and reshuffles if needed.
    ///
    /// This should be called at the start of a new round (before betting).
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are already out for this round.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Starts the betting phase.
    pub fn start_betting(&mut self) {
        if self.state == GameState::WaitingForBet {
            self.state = GameState::Betting;
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the player's hand for the current round.
    pub const fn player_hand(&self) -> &PlayerHand {
        &self.player_hand
    }

    /// Returns the dealer's hand for the current round.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the player has run out of money.
    ///
    /// Meaningful between rounds, once any payout has been made.
    pub const fn is_over(&self) -> bool {
        self.player.balance() == 0
    }

    /// Discards both hands and returns to `WaitingForBet`.
    pub fn clear_round(&mut self) {
        self.player_hand = PlayerHand::new();
        self.dealer_hand = DealerHand::new();
        self.state = GameState::WaitingForBet;
    }

    /// Pays out a settlement and closes the round.
    fn apply_settlement(&mut self, settlement: Settlement) -> RoundResult {
        let wager = self.player_hand.wager();
        self.player.credit(settlement.payout);
        self.state = GameState::Settled;

        let dealer_value = if self.dealer_hand.is_hole_revealed() {
            self.dealer_hand.best_value(Visibility::Revealed)
        } else {
            None
        };

        let net = if settlement.payout >= wager {
            isize::try_from(settlement.payout - wager).unwrap_or(isize::MAX)
        } else {
            isize::try_from(wager - settlement.payout).map_or(isize::MIN, |loss| -loss)
        };

        let result = RoundResult {
            outcome: settlement.outcome,
            wager,
            payout: settlement.payout,
            net,
            player_value: self.player_hand.best_value(Visibility::Revealed),
            dealer_value,
            balance: self.player.balance(),
        };

        tracing::info!(
            outcome = ?result.outcome,
            wager = result.wager,
            payout = result.payout,
            balance = result.balance,
            "round settled"
        );

        result
    }
}
