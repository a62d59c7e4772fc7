//! The dealer's deck.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// One or more 52-card sets, shuffled together.
///
/// Cards are dealt from the front and never returned; call
/// [`Deck::new_deck`] to replace the contents with fresh sets.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    deck_count: u8,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck made of `deck_count` 52-card sets.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDeckCount`] if `deck_count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(6, 42).unwrap();
    /// assert_eq!(deck.len(), 6 * DECK_SIZE);
    /// assert!(Deck::new(0, 42).is_err());
    /// ```
    pub fn new(deck_count: u8, seed: u64) -> Result<Self, DeckError> {
        if deck_count == 0 {
            return Err(DeckError::InvalidDeckCount);
        }

        let mut deck = Self {
            cards: VecDeque::with_capacity(deck_count as usize * DECK_SIZE),
            deck_count,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.new_deck();
        Ok(deck)
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// Re-populating a stacked deck with [`Deck::new_deck`] yields a single
    /// shuffled set.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
            deck_count: 1,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Replaces the contents with fresh 52-card sets and shuffles them.
    pub fn new_deck(&mut self) {
        self.cards.clear();

        for deck_number in 1..=self.deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push_back(Card::new(suit, rank, deck_number));
                }
            }
        }

        self.shuffle();
        tracing::debug!(
            decks = self.deck_count,
            cards = self.cards.len(),
            "deck populated"
        );
    }

    /// Applies a new random order to the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of 52-card sets used when re-populating.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, top first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
