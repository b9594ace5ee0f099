//! The call state machine: the central turn-taking mechanic.
//!
//! A call is the caller's guess that a specific opposing player holds a
//! specific card. A hit moves the card to the caller's hand and keeps the
//! initiative; a miss cedes the caller role to the player who proved the
//! guess wrong. Either way exactly one `CALL` event of identical shape is
//! appended.
//!
//! Suspicious calls (calling a card you hold, or a pit you have no stake in)
//! are heuristic pit-burn signals. They are advisory only: surfaced in the
//! returned `CallOutcome` and on the diagnostic stream, never a rejection.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::cards::{Card, Pit};
use crate::core::error::GameError;
use crate::core::event::EventTag;
use crate::core::state::GameState;

/// How a call resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallVerdict {
    /// The callee held the card; it moved to the caller's hand and the
    /// caller keeps the initiative.
    Hit,
    /// The callee did not hold the card; the caller role shifted to them.
    Miss,
}

/// Advisory heuristic raised alongside a call, never blocking it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallAdvisory {
    /// The caller already holds the card they called.
    HoldsCalledCard { pit: Pit },
    /// The caller holds no card from the called pit.
    NoStakeInPit { pit: Pit },
}

impl CallAdvisory {
    /// The pit this advisory flags as a possible burn.
    #[must_use]
    pub fn pit(self) -> Pit {
        match self {
            CallAdvisory::HoldsCalledCard { pit } | CallAdvisory::NoStakeInPit { pit } => pit,
        }
    }
}

impl fmt::Display for CallAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallAdvisory::HoldsCalledCard { pit } => {
                write!(f, "possible pit burn ({pit}): caller called a card they hold")
            }
            CallAdvisory::NoStakeInPit { pit } => {
                write!(f, "possible pit burn ({pit}): caller has no card from the pit called")
            }
        }
    }
}

/// Result of a legal call: the verdict plus any advisory warnings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    /// Hit or miss.
    pub verdict: CallVerdict,
    /// Heuristic pit-burn signals, in detection order. Observability only.
    pub advisories: Vec<CallAdvisory>,
}

impl GameState {
    /// Make a call: `caller` guesses that `callee` holds `card`.
    ///
    /// Preconditions, checked in order:
    /// 1. `caller` must be the current caller (`NotYourTurn`)
    /// 2. both players must be registered (`UnknownPlayer`)
    /// 3. the players must be on opposing teams (`SameTeamCall`)
    /// 4. `card` must name a catalog card (`UnknownCard`)
    ///
    /// On a hit the card moves to the caller's hand and the caller role is
    /// unchanged; on a miss no card moves and the callee becomes the caller.
    pub fn call(
        &mut self,
        caller: &str,
        callee: &str,
        card: &str,
    ) -> Result<CallOutcome, GameError> {
        if self.caller() != Some(caller) {
            return Err(GameError::NotYourTurn(caller.to_string()));
        }

        let caller_seat = self.seat_of(caller)?;
        let callee_seat = self.seat_of(callee)?;

        if caller_seat.team() == callee_seat.team() {
            return Err(GameError::SameTeamCall);
        }

        let card: Card = card.parse()?;
        let pit = Pit::of(card);

        let mut advisories = Vec::new();
        if self.hands[caller_seat].contains(&card) {
            let advisory = CallAdvisory::HoldsCalledCard { pit };
            warn!(%pit, "{advisory}");
            advisories.push(advisory);
        }
        let members = pit.members();
        if !self.hands[caller_seat].iter().any(|c| members.contains(c)) {
            let advisory = CallAdvisory::NoStakeInPit { pit };
            warn!(%pit, "{advisory}");
            advisories.push(advisory);
        }

        let verdict = if self.hands[callee_seat].contains(&card) {
            self.move_card(callee_seat, caller_seat, card);
            info!(%card, from = callee, to = caller, "called card transferred");
            CallVerdict::Hit
        } else {
            self.caller = Some(callee_seat);
            info!(%card, new_caller = callee, "call missed, caller shifted");
            CallVerdict::Miss
        };

        self.push_event(
            EventTag::Call,
            format!("{caller} called {callee} for {card}."),
        );

        Ok(CallOutcome { verdict, advisories })
    }
}
