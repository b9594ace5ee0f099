//! The mutating protocol operations: call, burn, drop, pass, force-shift.
//!
//! All operations are methods on [`crate::core::GameState`], grouped here by
//! responsibility:
//!
//! - `call`: the turn-taking state machine with its advisory side channel
//! - `resolution`: pit burn and drop, with the preserved burn/drop asymmetry
//! - `pass`: last-card pass and the administrative force-shift

mod call;
mod pass;
mod resolution;

pub use call::{CallAdvisory, CallOutcome, CallVerdict};
