use tracing::debug;

use crate::error::ActionError;
use crate::result::{HitResult, Outcome, RoundResult};
use crate::rules;

use super::Game;

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the round ends immediately with
    /// [`Outcome::PlayerBust`] and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or if the
    /// deck is empty under [`ExhaustionPolicy::Push`](crate::ExhaustionPolicy::Push).
    /// In the latter case the round has been ended as a push.
    pub fn hit(&mut self) -> Result<HitResult, ActionError> {
        self.ensure_player_turn()?;

        let busted = loop {
            match rules::hit(&mut self.player, &mut self.deck) {
                Ok(busted) => break busted,
                Err(err) => self.recover(err)?,
            }
        };

        let card = *self
            .player
            .cards()
            .last()
            .ok_or(ActionError::InvalidState)?;
        let value = self.player.value();
        debug!(%card, value, busted, "player hits");

        if busted {
            self.finish(Outcome::PlayerBust, false);
        }

        Ok(HitResult {
            card,
            value,
            busted,
        })
    }

    /// Player action: Stand (end the turn and let the dealer play).
    ///
    /// The dealer draws until reaching 17 or more, then the hands are
    /// compared.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or if the
    /// deck runs out during the dealer's turn under
    /// [`ExhaustionPolicy::Push`](crate::ExhaustionPolicy::Push). In the
    /// latter case the round has been ended as a push.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;
        debug!(value = self.player.value(), "player stands");

        let stand_on_soft_17 = self.options.stand_on_soft_17;
        loop {
            match rules::play_dealer(&mut self.dealer, &mut self.deck, stand_on_soft_17) {
                Ok(_) => break,
                Err(err) => self.recover(err)?,
            }
        }

        let outcome = rules::settle(&self.player, &self.dealer);
        Ok(self.finish(outcome, false))
    }
}
