//! Last-card pass and the administrative force-shift.
//!
//! A pass hands a caller's final card to a teammate along with the caller
//! role, for when a caller is down to one card and must cede initiative
//! inside the team. The force-shift bypasses every protocol check and
//! exists only so an external operator can correct a detected
//! inconsistency.

use tracing::info;

use crate::cards::Card;
use crate::core::error::GameError;
use crate::core::event::EventTag;
use crate::core::state::GameState;

impl GameState {
    /// Pass the caller's last card to a teammate, who becomes the new
    /// caller.
    ///
    /// Preconditions, checked in order: the passer must be the current
    /// caller (`NotYourTurn`), both players registered (`UnknownPlayer`),
    /// on the same team (`CrossTeamPass`), and the passer's hand must hold
    /// exactly one card (`WrongHandSize`).
    ///
    /// Returns the card that changed hands.
    pub fn pass(&mut self, passer: &str, passee: &str) -> Result<Card, GameError> {
        if self.caller() != Some(passer) {
            return Err(GameError::NotYourTurn(passer.to_string()));
        }

        let passer_seat = self.seat_of(passer)?;
        let passee_seat = self.seat_of(passee)?;

        if passer_seat.team() != passee_seat.team() {
            return Err(GameError::CrossTeamPass);
        }

        if self.hands[passer_seat].len() != 1 {
            return Err(GameError::WrongHandSize(self.hands[passer_seat].len()));
        }

        let card = self.hands[passer_seat][0];
        self.move_card(passer_seat, passee_seat, card);
        self.caller = Some(passee_seat);

        info!(%card, from = passer, to = passee, "card passed, caller shifted");
        self.push_event(
            EventTag::Pass,
            format!("{passer} passed card {card} to {passee}."),
        );
        Ok(card)
    }

    /// Unconditionally move a card between two hands, outside normal
    /// protocol.
    ///
    /// Bypasses turn, team, and pit checks; only registration and actual
    /// possession are validated (`UnknownPlayer`, `CardNotHeld`). Intended
    /// for externally detected inconsistencies, not normal play.
    pub fn force_shift(&mut self, from: &str, to: &str, card: &str) -> Result<(), GameError> {
        let from_seat = self.seat_of(from)?;
        let to_seat = self.seat_of(to)?;
        let card: Card = card.parse()?;

        if !self.hands[from_seat].contains(&card) {
            return Err(GameError::CardNotHeld {
                player: from.to_string(),
                card,
            });
        }

        self.move_card(from_seat, to_seat, card);

        info!(%card, from, to, "card force-shifted");
        self.push_event(
            EventTag::ForceShift,
            format!("Clean-up; shifted {card} from {from} to {to}."),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_requires_current_caller() {
        let mut state = GameState::with_seed(9);
        state.register(["A1", "B1", "C1"], ["A2", "B2", "C2"]);
        state.deal();
        state.set_caller("A1").unwrap();

        assert_eq!(
            state.pass("B1", "C1"),
            Err(GameError::NotYourTurn("B1".to_string()))
        );
    }

    #[test]
    fn test_force_shift_requires_possession() {
        let mut state = GameState::with_seed(9);
        state.register(["A1", "B1", "C1"], ["A2", "B2", "C2"]);
        state.deal();

        // Whoever holds 2H, the other five do not.
        let holder = ["A1", "B1", "C1", "A2", "B2", "C2"]
            .into_iter()
            .find(|p| state.hand(p).unwrap().iter().any(|c| c.to_string() == "2H"))
            .unwrap();
        let non_holder = ["A1", "B1", "C1", "A2", "B2", "C2"]
            .into_iter()
            .find(|p| *p != holder)
            .unwrap();

        let err = state.force_shift(non_holder, holder, "2H").unwrap_err();
        assert!(matches!(err, GameError::CardNotHeld { .. }));
    }
}
