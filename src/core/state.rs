//! The shared game state aggregate.
//!
//! One `GameState` hosts one game at a time: six hands, the roster, the
//! current caller, resolved pits, team scores, and the append-only event
//! log. It is constructed empty, populated via `register` and `deal`,
//! mutated through the protocol operations, and explicitly `reset` before
//! hosting a new game.
//!
//! The engine performs no locking; drivers needing concurrency must
//! serialize externally (typically one `GameState` per active game behind a
//! single owning task).

use smallvec::SmallVec;
use tracing::info;

use crate::cards::{full_deck, Card, Pit};

use super::error::GameError;
use super::event::{EventTag, GameEvent};
use super::rng::{DeckRng, DeckRngState};
use super::roster::Roster;
use super::seat::{Seat, SeatMap, TeamId, TEAM_SIZE};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 9;

/// An unordered hand. Never grows past the deal size plus won calls, so the
/// inline capacity covers the common case without heap allocation.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// Per-player scoring record: which pits this player burned and dropped,
/// in resolution order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    /// Pits this player resolved by force.
    pub pits_burned: Vec<Pit>,
    /// Pits this player resolved voluntarily.
    pub pits_dropped: Vec<Pit>,
}

/// The aggregate game state.
///
/// All mutating operations execute synchronously and atomically: a rejected
/// operation leaves every field unchanged.
pub struct GameState {
    /// Name-to-seat registry; `None` until `register` is called.
    pub(crate) roster: Option<Roster>,

    /// Hands by seat. Disjoint at all times.
    pub(crate) hands: SeatMap<Hand>,

    /// Per-seat burn/drop records.
    pub(crate) records: SeatMap<PlayerRecord>,

    /// Resolution count per team, indexed by `TeamId::index()`.
    pub(crate) total_pits: [u32; 2],

    /// The seat currently privileged to call, once set.
    pub(crate) caller: Option<Seat>,

    /// Pits already resolved. The name is historical: it covers pits
    /// removed by burn as well as by drop.
    pub(crate) dropped_pits: Vec<Pit>,

    /// Append-only event log, the sole observable history.
    pub(crate) events: Vec<GameEvent>,

    rng: DeckRng,
}

impl GameState {
    /// Create an empty state with an entropy-seeded shuffle RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(DeckRng::from_entropy())
    }

    /// Create an empty state with a fixed shuffle seed (reproducible deals).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(DeckRng::new(seed))
    }

    /// Create an empty state with an injected shuffle RNG.
    #[must_use]
    pub fn with_rng(rng: DeckRng) -> Self {
        Self {
            roster: None,
            hands: SeatMap::with_default(),
            records: SeatMap::with_default(),
            total_pits: [0; 2],
            caller: None,
            dropped_pits: Vec::new(),
            events: Vec::new(),
            rng,
        }
    }

    // === Registration ===

    /// Bind six named players into two teams of three.
    ///
    /// Seats follow argument order: `team_one` fills seats 0-2, `team_two`
    /// seats 3-5. Hands, records and team scores are re-initialized empty.
    /// Must be called before any operation that references players.
    ///
    /// Panics if the six names are not distinct.
    pub fn register(&mut self, team_one: [&str; TEAM_SIZE], team_two: [&str; TEAM_SIZE]) {
        self.roster = Some(Roster::new(team_one, team_two));
        self.hands = SeatMap::with_default();
        self.records = SeatMap::with_default();
        self.total_pits = [0; 2];
    }

    /// The team a player belongs to.
    ///
    /// Unregistered names are a precondition failure, never a silent
    /// default.
    pub fn team_of(&self, player: &str) -> Result<TeamId, GameError> {
        Ok(self.seat_of(player)?.team())
    }

    // === Dealing ===

    /// Shuffle the full 54-card deck and deal consecutive 9-card blocks to
    /// the six seats in registration order.
    ///
    /// Every seat ends with exactly [`HAND_SIZE`] cards and every deck card
    /// lands in exactly one hand.
    pub fn deal(&mut self) {
        let mut deck = full_deck();
        self.rng.shuffle(&mut deck);

        for (seat, hand) in self.hands.iter_mut() {
            let start = seat.index() * HAND_SIZE;
            *hand = Hand::from_slice(&deck[start..start + HAND_SIZE]);
        }

        info!("cards shuffled and dealt to players");
        self.push_event(EventTag::Initial, "Shuffled cards to players.");
    }

    // === Caller ===

    /// Choose the initial caller. Use only at the start of a game; the
    /// caller role afterwards moves via calls and passes.
    pub fn set_caller(&mut self, player: &str) -> Result<(), GameError> {
        let seat = self.seat_of(player)?;
        self.caller = Some(seat);

        info!(caller = player, "caller set");
        self.push_event(EventTag::CallerSet, format!("Caller set to {player}."));
        Ok(())
    }

    /// The current caller's name, if one has been set.
    #[must_use]
    pub fn caller(&self) -> Option<&str> {
        let roster = self.roster.as_ref()?;
        self.caller.map(|seat| roster.name(seat))
    }

    // === Inspection ===

    /// A player's current hand.
    pub fn hand(&self, player: &str) -> Result<&[Card], GameError> {
        Ok(&self.hands[self.seat_of(player)?])
    }

    /// A player's burn/drop record.
    pub fn record(&self, player: &str) -> Result<&PlayerRecord, GameError> {
        Ok(&self.records[self.seat_of(player)?])
    }

    /// Pits resolved so far, in resolution order (burns and drops both).
    #[must_use]
    pub fn dropped_pits(&self) -> &[Pit] {
        &self.dropped_pits
    }

    /// A team's running resolution score.
    #[must_use]
    pub fn total_pits(&self, team: TeamId) -> u32 {
        self.total_pits[team.index()]
    }

    /// The ordered event log.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Snapshot of the shuffle RNG, for reproducing deals.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    // === Reset ===

    /// Clear everything back to the empty, unregistered state so the same
    /// instance can host a new game. The shuffle RNG is retained, so a
    /// seeded instance stays reproducible across games.
    pub fn reset(&mut self) {
        self.roster = None;
        self.hands = SeatMap::with_default();
        self.records = SeatMap::with_default();
        self.total_pits = [0; 2];
        self.caller = None;
        self.dropped_pits.clear();
        self.events.clear();

        info!("game state reset");
    }

    // === Shared internals for the protocol operations ===

    /// Resolve a player name to its seat, rejecting unregistered names.
    pub(crate) fn seat_of(&self, player: &str) -> Result<Seat, GameError> {
        self.roster
            .as_ref()
            .and_then(|roster| roster.seat_of(player))
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))
    }

    /// Remove every card of a pit from every hand.
    pub(crate) fn strip_pit(&mut self, pit: Pit) {
        for (_, hand) in self.hands.iter_mut() {
            hand.retain(|card| Pit::of(*card) != pit);
        }
    }

    /// Move one card between hands, if present in `from`'s hand.
    pub(crate) fn move_card(&mut self, from: Seat, to: Seat, card: Card) {
        let hand = &mut self.hands[from];
        if let Some(pos) = hand.iter().position(|c| *c == card) {
            hand.remove(pos);
            self.hands[to].push(card);
        }
    }

    /// Append one event to the log.
    pub(crate) fn push_event(&mut self, tag: EventTag, detail: impl Into<String>) {
        self.events.push(GameEvent::new(tag, detail));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
