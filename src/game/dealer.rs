use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{HandError, ShowdownError};
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching
    /// `dealer_stands_on` or going bust.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = self
            .dealer_hand
            .play_out(&mut self.deck, self.options.dealer_stands_on)
            .map_err(|err| match err {
                HandError::DeckEmpty => ShowdownError::NoCards,
                HandError::NotActive => ShowdownError::InvalidState,
            })?;

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Settles the bet once both hands have stopped and pays the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state or a hand is
    /// still active.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let settlement = self.dealer_hand.settle_bet(&self.player_hand)?;
        Ok(self.apply_settlement(settlement))
    }
}
