//! # pitcall
//!
//! Authoritative rules engine for a six-player, two-team pit-calling card
//! game: a 54-card deck partitioned into nine fixed six-card "pits", dealt
//! nine cards to a hand, played by calling cards out of opposing hands and
//! scoring pits as they are burned or dropped.
//!
//! ## Design Principles
//!
//! 1. **One aggregate, explicit ownership**: all state lives in a
//!    [`GameState`] the driver owns and passes around. No globals, so
//!    multiple games can run side by side.
//!
//! 2. **Static catalog**: card-to-pit classification is fixed data
//!    ([`cards::Pit::of`]), never derived from game state, and player-to-team
//!    resolution is an O(1) roster lookup built once at registration.
//!
//! 3. **Errors reject, advisories inform**: every precondition violation is
//!    a [`GameError`] that leaves state untouched. Heuristic pit-burn
//!    signals during a call are advisory only, surfaced in the
//!    [`CallOutcome`] and on the `tracing` diagnostic stream.
//!
//! 4. **Reproducible randomness**: the shuffle draws from an injectable
//!    [`DeckRng`]; seed it for deterministic deals under test, or use OS
//!    entropy in production.
//!
//! ## Modules
//!
//! - `cards`: card codes and the nine-pit partition
//! - `core`: seats, roster, events, errors, RNG, and the `GameState`
//!   aggregate
//! - `protocol`: call, burn, drop, pass, and force-shift operations
//!
//! ## Example
//!
//! ```
//! use pitcall::GameState;
//!
//! let mut game = GameState::with_seed(42);
//! game.register(["A1", "B1", "C1"], ["A2", "B2", "C2"]);
//! game.deal();
//! game.set_caller("A1").unwrap();
//!
//! let outcome = game.call("A1", "A2", "9H").unwrap();
//! println!("{:?}", outcome.verdict);
//! ```

pub mod cards;
pub mod core;
pub mod protocol;

// Re-export commonly used types
pub use crate::cards::{Card, Joker, ParseCardError, Pit, Rank, Suit};

pub use crate::core::{
    DeckRng, DeckRngState, EventTag, GameError, GameEvent, GameState, Hand, PlayerRecord, Seat,
    SeatMap, TeamId, HAND_SIZE, SEAT_COUNT, TEAM_SIZE,
};

pub use crate::protocol::{CallAdvisory, CallOutcome, CallVerdict};
