//! Player and dealer hand representations.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use crate::card::{Card, CardValue, Face, HIDDEN_CARD, Visibility};
use crate::deck::Deck;
use crate::error::HandError;

/// The best score a hand can hold.
pub const BLACKJACK: u16 = 21;

/// Every total the given cards can make, ascending and without duplicates.
///
/// Each Ace independently counts low or high, so the Aces contribute a set of
/// partial sums that is rebuilt one Ace at a time.
fn possible_totals<'a>(cards: impl IntoIterator<Item = &'a Card>, visibility: Visibility) -> Vec<u16> {
    let mut base: u16 = 0;
    let mut ace_sums: Vec<u16> = alloc::vec![0];

    for card in cards {
        match card.value(visibility) {
            Some(CardValue::Fixed(value)) => base += u16::from(value),
            Some(CardValue::Flexible(low, high)) => {
                let mut next = Vec::with_capacity(ace_sums.len() * 2);
                for sum in &ace_sums {
                    next.push(sum + u16::from(low));
                    next.push(sum + u16::from(high));
                }
                next.sort_unstable();
                next.dedup();
                ace_sums = next;
            }
            // Face-down and not ours to see.
            None => {}
        }
    }

    ace_sums.into_iter().map(|sum| base + sum).collect()
}

fn best_total(totals: &[u16]) -> Option<u16> {
    totals.iter().rev().find(|&&total| total <= BLACKJACK).copied()
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can take more cards.
    Active,
    /// Hand has stopped drawing, either by standing or by reaching 21.
    Stand,
    /// Every total is over 21.
    Bust,
    /// Two-card 21.
    Natural,
}

/// Who holds a hand, deciding how drawn cards land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The player; every card is dealt face-up.
    Player,
    /// The dealer; the first card is dealt face-down.
    Dealer,
}

impl Role {
    /// Display label for the holder.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }

    /// Orientation for the next card drawn into a hand holding `held` cards.
    #[must_use]
    pub const fn draw_face(self, held: usize) -> Face {
        match self {
            Self::Dealer if held == 0 => Face::Down,
            _ => Face::Up,
        }
    }
}

/// Cards held by one participant, with their valuation and status.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in the order drawn.
    cards: Vec<Card>,
    /// Who holds the hand.
    role: Role,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates an empty, active hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            cards: Vec::new(),
            role,
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand as-is and re-evaluates the status.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotActive`] if the hand has stopped drawing.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if !self.is_active() {
            return Err(HandError::NotActive);
        }

        self.cards.push(card);
        self.evaluate();
        Ok(())
    }

    /// Deals one card from `deck`, oriented by the holder's role.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotActive`] if the hand has stopped drawing, or
    /// [`HandError::DeckEmpty`] if the deck has run out.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, HandError> {
        let face = self.role.draw_face(self.cards.len());
        self.draw_facing(deck, face)
    }

    fn draw_facing(&mut self, deck: &mut Deck, face: Face) -> Result<Card, HandError> {
        if !self.is_active() {
            return Err(HandError::NotActive);
        }

        let mut card = deck.deal().ok_or(HandError::DeckEmpty)?;
        if card.face() != face {
            card.flip();
        }
        self.add_card(card)?;
        Ok(card)
    }

    /// Stops drawing without taking a card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotActive`] if the hand has already stopped.
    pub const fn stand(&mut self) -> Result<(), HandError> {
        if !self.is_active() {
            return Err(HandError::NotActive);
        }
        self.status = HandStatus::Stand;
        Ok(())
    }

    fn evaluate(&mut self) {
        match best_total(&self.totals(Visibility::Revealed)) {
            None => self.status = HandStatus::Bust,
            Some(BLACKJACK) if self.cards.len() == 2 => self.status = HandStatus::Natural,
            Some(BLACKJACK) => self.status = HandStatus::Stand,
            Some(_) => {}
        }
    }

    /// Turns every face-down card face-up.
    fn reveal(&mut self) {
        for card in self.cards.iter_mut().filter(|card| !card.is_face_up()) {
            card.flip();
        }
    }

    /// Every total the visible cards can make, ascending.
    ///
    /// With [`Visibility::Public`], face-down cards are left out.
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Role, Suit, Visibility};
    ///
    /// let mut hand = Hand::new(Role::Player);
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace, 1)).unwrap();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace, 1)).unwrap();
    /// assert_eq!(hand.totals(Visibility::Public), vec![2, 12, 22]);
    /// ```
    #[must_use]
    pub fn totals(&self, visibility: Visibility) -> Vec<u16> {
        possible_totals(&self.cards, visibility)
    }

    /// The highest total not over 21, or `None` if the hand is bust.
    #[must_use]
    pub fn best_value(&self, visibility: Visibility) -> Option<u16> {
        best_total(&self.totals(visibility))
    }

    /// Number of face-down cards in the hand.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_face_up()).count()
    }

    /// Table-facing totals, each followed by a placeholder per hidden card,
    /// e.g. `"3 + *-*"`.
    #[must_use]
    pub fn value_labels(&self) -> Vec<String> {
        let hidden = self.hidden_count();
        self.totals(Visibility::Public)
            .into_iter()
            .map(|total| {
                let mut label = total.to_string();
                for _ in 0..hidden {
                    label.push_str(" + ");
                    label.push_str(HIDDEN_CARD);
                }
                label
            })
            .collect()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand can take more cards.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, HandStatus::Active)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self.status, HandStatus::Bust)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.status, HandStatus::Natural)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// The player's hand and the amount wagered on it.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    hand: Hand,
    wager: usize,
}

impl PlayerHand {
    /// Creates an empty hand with no wager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(Role::Player),
            wager: 0,
        }
    }

    /// Returns the amount wagered on this hand.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    pub(crate) const fn set_wager(&mut self, wager: usize) {
        self.wager = wager;
    }

    /// Deals one card face-up from `deck`.
    ///
    /// # Errors
    ///
    /// See [`Hand::draw`].
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, HandError> {
        self.hand.draw(deck)
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// See [`Hand::add_card`].
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        self.hand.add_card(card)
    }

    /// Stops drawing.
    ///
    /// # Errors
    ///
    /// See [`Hand::stand`].
    pub const fn stand(&mut self) -> Result<(), HandError> {
        self.hand.stand()
    }
}

impl Default for PlayerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PlayerHand {
    type Target = Hand;

    fn deref(&self) -> &Hand {
        &self.hand
    }
}

/// Where the dealer's automatic play stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Still below the stand threshold.
    Drawing,
    /// Reached the stand threshold without busting.
    Standing,
    /// Every total is over 21.
    Bust,
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    hand: Hand,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(Role::Dealer),
        }
    }

    /// Deals one card from `deck`; the first card lands face-down.
    ///
    /// # Errors
    ///
    /// See [`Hand::draw`].
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, HandError> {
        self.hand.draw(deck)
    }

    /// Adds a card to the hand as-is.
    ///
    /// # Errors
    ///
    /// See [`Hand::add_card`].
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        self.hand.add_card(card)
    }

    /// Reveals the hole card.
    pub fn reveal_hole(&mut self) {
        self.hand.reveal();
    }

    /// Returns whether every card is face-up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.hand.hidden_count() == 0
    }

    /// Returns where the dealer's play stands.
    #[must_use]
    pub const fn state(&self) -> DealerState {
        match self.hand.status {
            HandStatus::Active => DealerState::Drawing,
            HandStatus::Bust => DealerState::Bust,
            HandStatus::Stand | HandStatus::Natural => DealerState::Standing,
        }
    }

    /// Plays the dealer's hand out.
    ///
    /// Reveals the hole card, then draws face-up while the best value is
    /// below `stand_on`. Stops standing at `stand_on` or above, or bust.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DeckEmpty`] if the deck runs out while the dealer
    /// must draw.
    pub fn play_out(&mut self, deck: &mut Deck, stand_on: u16) -> Result<Vec<Card>, HandError> {
        self.reveal_hole();

        let mut drawn = Vec::new();
        while self.hand.is_active() {
            match self.hand.best_value(Visibility::Revealed) {
                Some(value) if value < stand_on => {
                    let card = self.hand.draw_facing(deck, Face::Up)?;
                    tracing::debug!(card = %card, "dealer draws");
                    drawn.push(card);
                }
                Some(_) => self.hand.status = HandStatus::Stand,
                None => self.hand.status = HandStatus::Bust,
            }
        }

        tracing::debug!(
            value = ?self.hand.best_value(Visibility::Revealed),
            state = ?self.state(),
            drawn = drawn.len(),
            "dealer finished"
        );
        Ok(drawn)
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for DealerHand {
    type Target = Hand;

    fn deref(&self) -> &Hand {
        &self.hand
    }
}
