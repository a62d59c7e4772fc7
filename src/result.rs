//! Round result types for settlement.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player has higher value, or the dealer busted.
    Win,
    /// Dealer has higher value.
    Lose,
    /// Equal values.
    Push,
    /// Player went bust; the dealer's hand is not played.
    Bust,
    /// Player has a natural and the dealer does not.
    Natural,
    /// Dealer has a natural and the player does not.
    DealerNatural,
    /// Both have naturals.
    NaturalPush,
}

impl HandOutcome {
    /// Returns whether the round was decided at the natural checkpoint.
    #[must_use]
    pub const fn is_natural(self) -> bool {
        matches!(
            self,
            Self::Natural | Self::DealerNatural | Self::NaturalPush
        )
    }
}

/// Outcome of a settlement and the amount paid back to the player.
///
/// The wager is taken from the balance when the bet is placed, so `payout`
/// includes the returned stake: 0 on a loss, the wager on a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Amount credited to the player.
    pub payout: usize,
}

/// Result of a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The amount wagered.
    pub wager: usize,
    /// Amount credited to the player.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's best value, `None` if bust.
    pub player_value: Option<u16>,
    /// The dealer's best value, `None` if bust or not played.
    pub dealer_value: Option<u16>,
    /// Player balance after the payout.
    pub balance: usize,
}
