//! Card types.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Placeholder shown in place of a face-down card.
pub const HIDDEN_CARD: &str = "*-*";

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Full suit name, e.g. `"Spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Single-letter suit initial used in short card notation.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Full rank name, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Shorthand rank, e.g. `"Q"` or `"10"`.
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Blackjack value of the rank.
    #[must_use]
    pub const fn value(self) -> CardValue {
        match self {
            Self::Ace => CardValue::Flexible(1, 11),
            Self::Two => CardValue::Fixed(2),
            Self::Three => CardValue::Fixed(3),
            Self::Four => CardValue::Fixed(4),
            Self::Five => CardValue::Fixed(5),
            Self::Six => CardValue::Fixed(6),
            Self::Seven => CardValue::Fixed(7),
            Self::Eight => CardValue::Fixed(8),
            Self::Nine => CardValue::Fixed(9),
            Self::Ten | Self::Jack | Self::Queen | Self::King => CardValue::Fixed(10),
        }
    }
}

/// The value a card contributes to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A single value.
    Fixed(u8),
    /// Either of two values, chosen independently per card (Aces).
    Flexible(u8, u8),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Flexible(low, high) => write!(f, "{low} or {high}"),
        }
    }
}

/// Card orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Visible to everyone.
    #[default]
    Up,
    /// Hidden from the table.
    Down,
}

impl Face {
    /// Returns the opposite orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Who is looking at a card.
///
/// Table-facing queries use [`Visibility::Public`] and never see face-down
/// cards. Scoring uses [`Visibility::Revealed`] to look through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Respect face-down privacy.
    Public,
    /// Bypass face-down privacy.
    Revealed,
}

/// A playing card.
///
/// Suit, rank and deck number are fixed for the card's lifetime; only the
/// orientation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    deck_number: u8,
    face: Face,
}

impl Card {
    /// Creates a face-up card belonging to the given 52-card set (1-based).
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, deck_number: u8) -> Self {
        Self {
            suit,
            rank,
            deck_number,
            face: Face::Up,
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the 1-based index of the 52-card set this card came from.
    #[must_use]
    pub const fn deck_number(&self) -> u8 {
        self.deck_number
    }

    /// Returns the current orientation.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.face, Face::Up)
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    /// Returns the card's value, or `None` if it is face-down and the caller
    /// is not allowed to see it.
    ///
    /// ```
    /// use twentyone::{Card, CardValue, Rank, Suit, Visibility};
    ///
    /// let mut card = Card::new(Suit::Hearts, Rank::Ace, 1);
    /// assert_eq!(card.value(Visibility::Public), Some(CardValue::Flexible(1, 11)));
    ///
    /// card.flip();
    /// assert_eq!(card.value(Visibility::Public), None);
    /// assert_eq!(card.value(Visibility::Revealed), Some(CardValue::Flexible(1, 11)));
    /// ```
    #[must_use]
    pub const fn value(&self, visibility: Visibility) -> Option<CardValue> {
        if self.visible_to(visibility) {
            Some(self.rank.value())
        } else {
            None
        }
    }

    /// Returns whether the card is an Ace.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::FaceDown`] if the card is face-down and
    /// `visibility` is [`Visibility::Public`].
    pub const fn is_ace(&self, visibility: Visibility) -> Result<bool, CardError> {
        if self.visible_to(visibility) {
            Ok(matches!(self.rank, Rank::Ace))
        } else {
            Err(CardError::FaceDown)
        }
    }

    /// Verbose description, e.g. `Ace of diamonds (Value = 1 or 11, Deck# = 3)`.
    ///
    /// Intended for inspecting the deck; it ignores orientation.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} of {} (Value = {}, Deck# = {})",
            self.rank.name(),
            self.suit.name().to_lowercase(),
            self.rank.value(),
            self.deck_number
        )
    }

    const fn visible_to(&self, visibility: Visibility) -> bool {
        self.is_face_up() || matches!(visibility, Visibility::Revealed)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up() {
            write!(f, "{}-{}", self.rank.short(), self.suit.initial())
        } else {
            f.write_str(HIDDEN_CARD)
        }
    }
}
