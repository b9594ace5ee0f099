//! Seats, teams, and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has six seats in two teams of three. Seats 0-2 belong to
//! `team_1`, seats 3-5 to `team_2`, fixed at registration, so team membership
//! is a range check rather than a lookup.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access, indexable by
//! `Seat`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 6;

/// Number of seats per team.
pub const TEAM_SIZE: usize = 3;

/// One of the six seats, 0-based in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a seat identifier.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team this seat belongs to.
    #[must_use]
    pub const fn team(self) -> TeamId {
        if (self.0 as usize) < TEAM_SIZE {
            TeamId::One
        } else {
            TeamId::Two
        }
    }

    /// Iterate over all six seats in registration order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

/// One of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    /// Both teams.
    pub const ALL: [TeamId; 2] = [TeamId::One, TeamId::Two];

    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> TeamId {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }

    /// Raw team index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::One => 0,
            TeamId::Two => 1,
        }
    }

    /// The three seats on this team.
    pub fn seats(self) -> impl Iterator<Item = Seat> {
        let start = self.index() * TEAM_SIZE;
        (start..start + TEAM_SIZE).map(|i| Seat(i as u8))
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::One => write!(f, "team_1"),
            TeamId::Two => write!(f, "team_2"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// Always holds exactly [`SEAT_COUNT`] entries.
///
/// ## Example
///
/// ```
/// use pitcall::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<u32> = SeatMap::with_value(0);
/// counts[Seat::new(2)] = 9;
/// assert_eq!(counts[Seat::new(2)], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        let data = (0..SEAT_COUNT as u8).map(|i| factory(Seat(i))).collect();
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
