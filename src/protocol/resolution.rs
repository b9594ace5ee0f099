//! Pit resolution: burn (forced, penalized) and drop (voluntary, rewarded).
//!
//! Both remove a pit's six cards from every hand and record the pit as
//! resolved at most once. Scoring is asymmetric by design: a burn credits
//! the *opposing* team, a drop credits the dropper's *own* team.
//!
//! The two operations also differ on already-resolved pits, and the
//! difference is preserved deliberately (it is observable behavior): burn
//! re-strips the hands and appends a `BURN` event on every invocation,
//! guarding only the scoring and record-keeping, while drop short-circuits
//! entirely as a successful no-op that appends no event.

use tracing::{info, warn};

use crate::cards::{Card, Pit};
use crate::core::error::GameError;
use crate::core::event::EventTag;
use crate::core::state::GameState;

impl GameState {
    /// Resolve a pit by force, crediting the opposing team.
    ///
    /// Used when the surrounding game detects a misplay; the engine does not
    /// judge the reason. The pit is whichever one `card` belongs to.
    pub fn burn(&mut self, burner: &str, card: &str) -> Result<(), GameError> {
        let card: Card = card.parse()?;
        let burner_seat = self.seat_of(burner)?;
        let pit = Pit::of(card);

        // Hand cleanup happens on every invocation, resolved or not.
        self.strip_pit(pit);

        if !self.dropped_pits.contains(&pit) {
            self.dropped_pits.push(pit);
            self.records[burner_seat].pits_burned.push(pit);

            let opposing = burner_seat.team().opponent();
            self.total_pits[opposing.index()] += 1;
        }

        info!(%pit, burner, "pit burned");
        self.push_event(EventTag::Burn, format!("{burner} burned pit {pit}."));
        Ok(())
    }

    /// Resolve a pit voluntarily, crediting the dropper's own team.
    ///
    /// Dropping an already-resolved pit is a redundant but harmless move: a
    /// successful no-op, not an error.
    pub fn drop_pit(&mut self, dropper: &str, card: &str) -> Result<(), GameError> {
        let card: Card = card.parse()?;
        let dropper_seat = self.seat_of(dropper)?;
        let pit = Pit::of(card);

        if self.dropped_pits.contains(&pit) {
            warn!(%pit, "pit has already been dropped");
            return Ok(());
        }

        self.strip_pit(pit);
        self.dropped_pits.push(pit);
        self.records[dropper_seat].pits_dropped.push(pit);

        let team = dropper_seat.team();
        self.total_pits[team.index()] += 1;

        info!(%pit, dropper, "pit dropped");
        self.push_event(EventTag::Drop, format!("{dropper} dropped pit {pit}."));
        Ok(())
    }
}
