//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when inspecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card is face-down and privacy was not bypassed.
    #[error("card is face down")]
    FaceDown,
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The number of 52-card sets must be at least one.
    #[error("deck count must be a positive integer")]
    InvalidDeckCount,
}

/// Errors that can occur when adding cards to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand is not active.
    #[error("hand is not active")]
    NotActive,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckEmpty,
}

/// Errors that can occur during final settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The player's hand is still taking cards.
    #[error("player hand is still active")]
    PlayerActive,
    /// The dealer's hand is still taking cards.
    #[error("dealer hand is still active")]
    DealerActive,
}

/// Errors that can occur when creating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Name is empty or longer than the table allows.
    #[error("name must be between 1 and {max} characters")]
    InvalidName {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Errors that can occur when parsing a money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input is empty.
    #[error("amount is empty")]
    Empty,
    /// Input is not a decimal number.
    #[error("amount is not a number")]
    NotANumber,
    /// Input has more decimal places than the currency allows.
    #[error("amount has more than {precision} decimal places")]
    TooPrecise {
        /// Decimal places allowed by the currency.
        precision: u8,
    },
    /// Input does not fit in the balance type.
    #[error("amount is too large")]
    Overflow,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The player has not placed a bet.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<HandError> for ActionError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::NotActive => Self::HandNotActive,
            HandError::DeckEmpty => Self::NoCards,
        }
    }
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// A hand was still active at settlement.
    #[error(transparent)]
    Settle(#[from] SettleError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The deck could not be built.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The player could not be created.
    #[error(transparent)]
    Player(#[from] PlayerError),
}
