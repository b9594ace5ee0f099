//! Name-to-seat registry, built once at registration.
//!
//! Operations take player names at the API boundary; the roster resolves
//! them to seats in O(1), replacing repeated membership scans.

use rustc_hash::FxHashMap;

use super::seat::{Seat, SeatMap, TEAM_SIZE};

/// The six registered player names and their seat assignments.
///
/// Seats 0-2 are the first team's names in the order given, seats 3-5 the
/// second team's.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    names: SeatMap<String>,
    index: FxHashMap<String, Seat>,
}

impl Roster {
    /// Build a roster from two teams of three names.
    ///
    /// Panics if the six names are not distinct: duplicate names would make
    /// seat resolution ambiguous.
    #[must_use]
    pub fn new(team_one: [&str; TEAM_SIZE], team_two: [&str; TEAM_SIZE]) -> Self {
        let names = SeatMap::new(|seat| {
            let i = seat.index();
            if i < TEAM_SIZE {
                team_one[i].to_string()
            } else {
                team_two[i - TEAM_SIZE].to_string()
            }
        });

        let mut index = FxHashMap::default();
        for (seat, name) in names.iter() {
            let previous = index.insert(name.clone(), seat);
            assert!(previous.is_none(), "Player names must be distinct: `{name}`");
        }

        Self { names, index }
    }

    /// Resolve a player name to its seat.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.index.get(name).copied()
    }

    /// The name registered at a seat.
    #[must_use]
    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat]
    }

    /// Iterate over (Seat, name) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &str)> {
        self.names.iter().map(|(seat, name)| (seat, name.as_str()))
    }
}
