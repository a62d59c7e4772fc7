//! A single-player blackjack game against a scripted dealer, with optional
//! `no_std` support for the game engine.
//!
//! The crate provides a [`Game`] type that runs a round from betting through
//! naturals, the player's turn, dealer play and settlement. Hand valuation
//! keeps every total a hand can make, since each Ace may count 1 or 11.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), "Ada", 42).unwrap();
//! game.start_betting();
//! game.bet(1_000).unwrap();
//! game.deal().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod player;
pub mod result;
mod settle;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Face, HIDDEN_CARD, Rank, Suit, Visibility};
pub use deck::Deck;
pub use error::{
    ActionError, AmountError, BetError, CardError, DealError, DeckError, HandError, PlayerError,
    ReshuffleError, SettleError, SetupError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, DealerHand, DealerState, Hand, HandStatus, PlayerHand, Role};
pub use money::Currency;
pub use options::{GameOptions, RoundingMode};
pub use player::Player;
pub use result::{HandOutcome, RoundResult, Settlement};
