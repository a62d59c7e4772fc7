//! Table configuration options.

extern crate alloc;

use alloc::string::String;

use crate::money::Currency;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_reshuffle_below(20)
///     .with_blackjack_pays(1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of 52-card sets shuffled into the deck.
    pub decks: u8,
    /// A fresh deck is shuffled before a round when fewer cards remain.
    pub reshuffle_below: usize,
    /// Profit ratio paid on a natural (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for natural payouts.
    pub rounding_blackjack: RoundingMode,
    /// Dealer stops drawing at this value or above.
    pub dealer_stands_on: u16,
    /// Balance a new player starts with, in minor units.
    pub starting_balance: usize,
    /// How money is displayed and parsed.
    pub currency: Currency,
    /// Typing this at any prompt ends the session.
    pub quit_keyword: String,
    /// Longest accepted player name, in characters.
    pub max_name_len: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_below: 60,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            starting_balance: 50_000,
            currency: Currency::default(),
            quit_keyword: String::from("quit"),
            max_name_len: 12,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the remaining-card count below which a new deck is shuffled.
    #[must_use]
    pub fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for natural payouts.
    #[must_use]
    pub fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the value the dealer stands on.
    #[must_use]
    pub fn with_dealer_stands_on(mut self, value: u16) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the starting balance, in minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(10_000);
    /// assert_eq!(options.starting_balance, 10_000);
    /// ```
    #[must_use]
    pub fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the display currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the quit keyword.
    #[must_use]
    pub fn with_quit_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.quit_keyword = keyword.into();
        self
    }

    /// Sets the longest accepted player name.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }
}
