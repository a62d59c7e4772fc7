use crate::error::{BetError, DealError, ShowdownError};
use crate::result::RoundResult;

use super::{Game, GameState};

/// Cards needed for the initial deal: two each.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Places the player's bet, taking it from their balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bet is zero,
    /// or the player lacks funds.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        self.player.place_bet(&mut self.player_hand, amount)?;
        self.state = GameState::Dealing;
        tracing::debug!(amount, balance = self.player.balance(), "bet placed");
        Ok(())
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// The dealer's first card lands face-down.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, the game is not ready to
    /// deal, or there are not enough cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        match self.state {
            GameState::Dealing => {}
            GameState::Betting => return Err(DealError::NoBet),
            _ => return Err(DealError::InvalidState),
        }

        if self.deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            self.player_hand
                .draw(&mut self.deck)
                .map_err(|_| DealError::NotEnoughCards)?;
            self.dealer_hand
                .draw(&mut self.deck)
                .map_err(|_| DealError::NotEnoughCards)?;
        }

        tracing::debug!(
            player = %&*self.player_hand,
            dealer = %&*self.dealer_hand,
            "initial cards dealt"
        );
        self.state = GameState::Naturals;
        Ok(())
    }

    /// Checks both hands for naturals.
    ///
    /// If either side has one, the dealer's hole card is revealed, the payout
    /// is credited and the round ends: the result is returned and no further
    /// action is taken. Otherwise play moves to the player's turn and `None`
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial cards have not just been dealt.
    pub fn settle_naturals(&mut self) -> Result<Option<RoundResult>, ShowdownError> {
        if self.state != GameState::Naturals {
            return Err(ShowdownError::InvalidState);
        }

        let Some(settlement) = self
            .dealer_hand
            .settle_naturals(&self.player_hand, &self.options)
        else {
            self.state = GameState::PlayerTurn;
            return Ok(None);
        };

        self.dealer_hand.reveal_hole();
        Ok(Some(self.apply_settlement(settlement)))
    }
}
