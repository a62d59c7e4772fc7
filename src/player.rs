//! The player and their balance.

extern crate alloc;

use alloc::string::String;

use crate::error::{BetError, PlayerError};
use crate::hand::PlayerHand;

/// A named player with a balance in minor currency units.
///
/// The balance only changes when a bet is placed or a payout is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    balance: usize,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if `name` is empty or longer than
    /// `max_name_len` characters.
    pub fn new(name: &str, balance: usize, max_name_len: usize) -> Result<Self, PlayerError> {
        Self::validate_name(name, max_name_len)?;
        Ok(Self {
            name: String::from(name),
            balance,
        })
    }

    /// Checks a name is between 1 and `max_name_len` characters long.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] otherwise.
    pub fn validate_name(name: &str, max_name_len: usize) -> Result<(), PlayerError> {
        if (1..=max_name_len).contains(&name.chars().count()) {
            Ok(())
        } else {
            Err(PlayerError::InvalidName { max: max_name_len })
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Takes `amount` from the balance and wagers it on `hand`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance.
    pub fn place_bet(&mut self, hand: &mut PlayerHand, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.balance < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        hand.set_wager(amount);
        Ok(())
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }
}
