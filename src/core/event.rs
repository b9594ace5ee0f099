//! The append-only event log.
//!
//! Every mutating operation appends exactly one tagged event; the log is the
//! sole externally observable history of a game. Events are serializable so
//! drivers can export it. The timestamped diagnostic stream (`tracing`) is
//! separate and never part of game state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying what kind of operation produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTag {
    /// Cards shuffled and dealt.
    Initial,
    /// Initial caller chosen.
    CallerSet,
    /// A call, successful or not; the event shape is identical either way.
    Call,
    /// Forced pit resolution.
    Burn,
    /// Voluntary pit resolution.
    Drop,
    /// Last-card pass within a team.
    Pass,
    /// Administrative card correction.
    ForceShift,
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventTag::Initial => "INITIAL",
            EventTag::CallerSet => "CALLER_SET",
            EventTag::Call => "CALL",
            EventTag::Burn => "BURN",
            EventTag::Drop => "DROP",
            EventTag::Pass => "PASS",
            EventTag::ForceShift => "FORCE_SHIFT",
        };
        f.write_str(name)
    }
}

/// One entry in the event log: a tag plus a human-readable description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// What kind of operation this was.
    pub tag: EventTag,
    /// Human-readable description, e.g. `"A1 called B2 for 9H."`.
    pub detail: String,
}

impl GameEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(tag: EventTag, detail: impl Into<String>) -> Self {
        Self {
            tag,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(EventTag::Initial.to_string(), "INITIAL");
        assert_eq!(EventTag::CallerSet.to_string(), "CALLER_SET");
        assert_eq!(EventTag::ForceShift.to_string(), "FORCE_SHIFT");
    }

    #[test]
    fn test_event_display() {
        let event = GameEvent::new(EventTag::Call, "A1 called B2 for 9H.");
        assert_eq!(event.to_string(), "CALL: A1 called B2 for 9H.");
    }

    #[test]
    fn test_event_serialization_uses_wire_tags() {
        let event = GameEvent::new(EventTag::CallerSet, "Caller set to A1.");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("CALLER_SET"));

        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
