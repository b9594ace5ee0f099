//! Core engine types: seats, roster, state, events, errors, RNG.
//!
//! This module contains the shared building blocks the protocol operations
//! mutate through one `GameState` instance.

pub mod error;
pub mod event;
pub mod rng;
pub mod roster;
pub mod seat;
pub mod state;

pub use error::GameError;
pub use event::{EventTag, GameEvent};
pub use rng::{DeckRng, DeckRngState};
pub use roster::Roster;
pub use seat::{Seat, SeatMap, TeamId, SEAT_COUNT, TEAM_SIZE};
pub use state::{GameState, Hand, PlayerRecord, HAND_SIZE};
