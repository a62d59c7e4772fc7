//! Settlement rules for naturals and finished hands.

use crate::card::Visibility;
use crate::error::SettleError;
use crate::hand::{DealerHand, PlayerHand};
use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandOutcome, Settlement};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl DealerHand {
    /// Settles the round if either side was dealt a natural.
    ///
    /// Returns `None` when neither hand is a natural and play continues.
    /// A player natural pays the stake back plus `blackjack_pays` times the
    /// wager; a double natural returns the stake; a dealer natural pays
    /// nothing. Payouts saturate at `usize::MAX`.
    #[must_use]
    pub fn settle_naturals(&self, player: &PlayerHand, options: &GameOptions) -> Option<Settlement> {
        let wager = player.wager();

        let settlement = match (player.is_natural(), self.is_natural()) {
            (false, false) => return None,
            (true, true) => Settlement {
                outcome: HandOutcome::NaturalPush,
                payout: wager,
            },
            (true, false) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (wager as f64) * options.blackjack_pays;
                Settlement {
                    outcome: HandOutcome::Natural,
                    payout: wager
                        .saturating_add(round_amount(winnings, options.rounding_blackjack)),
                }
            }
            (false, true) => Settlement {
                outcome: HandOutcome::DealerNatural,
                payout: 0,
            },
        };

        Some(settlement)
    }

    /// Settles a round in which both sides have stopped drawing.
    ///
    /// A bust player loses without the dealer's hand being consulted. A bust
    /// dealer scores 0. Otherwise the higher best value wins: a win pays
    /// twice the wager, a push returns it, a loss pays nothing. Payouts
    /// saturate at `usize::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::PlayerActive`] or [`SettleError::DealerActive`]
    /// if either hand can still draw.
    pub fn settle_bet(&self, player: &PlayerHand) -> Result<Settlement, SettleError> {
        if player.is_active() {
            return Err(SettleError::PlayerActive);
        }

        let wager = player.wager();
        let Some(player_value) = player.best_value(Visibility::Revealed) else {
            return Ok(Settlement {
                outcome: HandOutcome::Bust,
                payout: 0,
            });
        };

        if self.is_active() {
            return Err(SettleError::DealerActive);
        }

        let dealer_value = self.best_value(Visibility::Revealed).unwrap_or(0);

        let settlement = if player_value > dealer_value {
            Settlement {
                outcome: HandOutcome::Win,
                payout: wager.saturating_mul(2),
            }
        } else if player_value == dealer_value {
            Settlement {
                outcome: HandOutcome::Push,
                payout: wager,
            }
        } else {
            Settlement {
                outcome: HandOutcome::Lose,
                payout: 0,
            }
        };

        Ok(settlement)
    }
}
