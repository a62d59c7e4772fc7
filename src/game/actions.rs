use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Moves on once the player's hand has stopped. A bust player forfeits
    /// straight away, so the dealer's turn is skipped.
    fn advance_after_hand(&mut self) {
        if self.player_hand.is_active() {
            return;
        }

        self.state = if self.player_hand.is_bust() {
            GameState::RoundOver
        } else {
            GameState::DealerTurn
        };
    }

    /// Player action: Hit (draw a card face-up).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not
    /// active, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player_hand.draw(&mut self.deck)?;
        tracing::debug!(card = %card, status = ?self.player_hand.status(), "player hits");

        self.advance_after_hand();
        Ok(card)
    }

    /// Player action: Stand (stop drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the hand is not
    /// active.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player_hand.stand()?;
        tracing::debug!("player stands");

        self.advance_after_hand();
        Ok(())
    }
}
