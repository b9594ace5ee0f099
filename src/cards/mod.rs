//! Card catalog: wire codes and the nine-pit partition.
//!
//! ## Key Types
//!
//! - `Card`: one of the 54 catalog cards, parsed from its wire code
//! - `Pit`: one of the nine fixed six-card groups, the unit of scoring
//! - `ParseCardError`: the only way an unknown code surfaces

mod card;
mod pit;

pub use card::{Card, Joker, ParseCardError, Rank, Suit};
pub use pit::{full_deck, Pit, DECK_SIZE, PIT_SIZE};
