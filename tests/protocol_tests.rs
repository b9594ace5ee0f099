//! Call, pass, and force-shift protocol behavior driven through the public
//! API with seeded deals.

use pitcall::cards::Card;
use pitcall::protocol::{CallAdvisory, CallVerdict};
use pitcall::{EventTag, GameError, GameState, Pit};

const PLAYERS: [&str; 6] = ["A1", "B1", "C1", "A2", "B2", "C2"];
const TEAM_TWO: [&str; 3] = ["A2", "B2", "C2"];

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registered, dealt, caller A1.
fn setup(seed: u64) -> GameState {
    init_tracing();
    let mut state = GameState::with_seed(seed);
    state.register(["A1", "B1", "C1"], ["A2", "B2", "C2"]);
    state.deal();
    state.set_caller("A1").unwrap();
    state
}

fn holds(state: &GameState, player: &str, card: &str) -> bool {
    let card: Card = card.parse().unwrap();
    state.hand(player).unwrap().contains(&card)
}

fn snapshot_hands(state: &GameState) -> Vec<Vec<Card>> {
    PLAYERS
        .iter()
        .map(|p| state.hand(p).unwrap().to_vec())
        .collect()
}

// === Calls ===

#[test]
fn test_call_by_non_caller_changes_nothing() {
    let mut state = setup(42);
    let before = snapshot_hands(&state);

    let err = state.call("B1", "A2", "9H").unwrap_err();

    assert_eq!(err, GameError::NotYourTurn("B1".to_string()));
    assert_eq!(state.caller(), Some("A1"));
    assert_eq!(snapshot_hands(&state), before);
    assert_eq!(state.events().len(), 2); // INITIAL + CALLER_SET only
}

#[test]
fn test_call_rejects_unregistered_callee() {
    let mut state = setup(42);

    assert_eq!(
        state.call("A1", "Zed", "9H"),
        Err(GameError::UnknownPlayer("Zed".to_string()))
    );
}

#[test]
fn test_call_must_cross_teams() {
    let mut state = setup(42);

    assert_eq!(state.call("A1", "B1", "9H"), Err(GameError::SameTeamCall));
    assert_eq!(state.caller(), Some("A1"));
}

#[test]
fn test_call_rejects_unknown_card() {
    let mut state = setup(42);
    let before = snapshot_hands(&state);

    assert!(matches!(
        state.call("A1", "A2", "13H"),
        Err(GameError::UnknownCard(_))
    ));
    assert_eq!(snapshot_hands(&state), before);
}

#[test]
fn test_successful_call_moves_the_card_and_keeps_initiative() {
    let mut state = setup(42);

    // Call a card the callee actually holds.
    let target = state.hand("A2").unwrap()[0];
    let code = target.to_string();
    let before = state.hand("A1").unwrap().len();

    let outcome = state.call("A1", "A2", &code).unwrap();

    assert_eq!(outcome.verdict, CallVerdict::Hit);
    assert_eq!(state.caller(), Some("A1"));
    assert!(holds(&state, "A1", &code));
    assert!(!holds(&state, "A2", &code));
    assert_eq!(state.hand("A1").unwrap().len(), before + 1);

    let event = state.events().last().unwrap();
    assert_eq!(event.tag, EventTag::Call);
    assert_eq!(event.detail, format!("A1 called A2 for {code}."));
}

#[test]
fn test_failed_call_shifts_the_caller() {
    // A1 calls 9H from a team-two player who does not hold it: the caller
    // role moves, no card does.
    let mut state = setup(42);

    let callee = TEAM_TWO
        .into_iter()
        .find(|p| !holds(&state, p, "9H"))
        .unwrap();
    let before = snapshot_hands(&state);
    let events_before = state.events().len();

    let outcome = state.call("A1", callee, "9H").unwrap();

    assert_eq!(outcome.verdict, CallVerdict::Miss);
    assert_eq!(state.caller(), Some(callee));
    assert_eq!(snapshot_hands(&state), before);
    assert_eq!(state.events().len(), events_before + 1);

    let event = state.events().last().unwrap();
    assert_eq!(event.tag, EventTag::Call);
    assert_eq!(event.detail, format!("A1 called {callee} for 9H."));
}

#[test]
fn test_calling_a_held_card_warns_but_proceeds() {
    let mut state = setup(42);

    let held = state.hand("A1").unwrap()[0];
    let code = held.to_string();
    let pit = Pit::of(held);

    let outcome = state.call("A1", "A2", &code).unwrap();

    assert!(outcome
        .advisories
        .contains(&CallAdvisory::HoldsCalledCard { pit }));
}

#[test]
fn test_calling_a_pit_without_stake_warns_but_proceeds() {
    let mut state = setup(42);

    // Clear every MINOR_HEARTS card out of the caller's hand first so the
    // advisory condition holds regardless of the deal.
    let pit = Pit::of("2H".parse().unwrap());
    let held: Vec<Card> = state
        .hand("A1")
        .unwrap()
        .iter()
        .copied()
        .filter(|c| Pit::of(*c) == pit)
        .collect();
    for card in held {
        state.force_shift("A1", "B1", &card.to_string()).unwrap();
    }

    let outcome = state.call("A1", "A2", "2H").unwrap();

    assert!(outcome.advisories.contains(&CallAdvisory::NoStakeInPit { pit }));
}

#[test]
fn test_clean_call_raises_no_advisories() {
    let mut state = setup(42);

    // A card of a pit the caller has a stake in, but does not hold itself.
    let hand = state.hand("A1").unwrap().to_vec();
    let candidate = hand
        .iter()
        .flat_map(|c| Pit::of(*c).members())
        .find(|c| !hand.contains(c))
        .unwrap();

    let outcome = state.call("A1", "A2", &candidate.to_string()).unwrap();
    assert!(outcome.advisories.is_empty());
}

// === Passes ===

#[test]
fn test_pass_requires_exactly_one_card() {
    let mut state = setup(42);
    let held = state.hand("A1").unwrap().len();

    assert_eq!(
        state.pass("A1", "B1"),
        Err(GameError::WrongHandSize(held))
    );
    assert_eq!(state.caller(), Some("A1"));
}

#[test]
fn test_pass_must_stay_within_the_team() {
    let mut state = setup(42);

    assert_eq!(state.pass("A1", "A2"), Err(GameError::CrossTeamPass));
}

#[test]
fn test_pass_moves_last_card_and_caller_role() {
    let mut state = setup(42);

    // Shrink A1 down to one card through administrative shifts.
    while state.hand("A1").unwrap().len() > 1 {
        let card = state.hand("A1").unwrap()[0].to_string();
        state.force_shift("A1", "C1", &card).unwrap();
    }
    let last = state.hand("A1").unwrap()[0];
    let passee_before = state.hand("B1").unwrap().len();

    let passed = state.pass("A1", "B1").unwrap();

    assert_eq!(passed, last);
    assert_eq!(state.caller(), Some("B1"));
    assert!(state.hand("A1").unwrap().is_empty());
    assert_eq!(state.hand("B1").unwrap().len(), passee_before + 1);

    let event = state.events().last().unwrap();
    assert_eq!(event.tag, EventTag::Pass);
    assert_eq!(event.detail, format!("A1 passed card {last} to B1."));
}

// === Force shift ===

#[test]
fn test_force_shift_bypasses_turn_and_team_checks() {
    let mut state = setup(42);

    // B2 is not the caller and C1 is on the other team; the shift still
    // goes through.
    let card = state.hand("B2").unwrap()[0];
    let code = card.to_string();

    state.force_shift("B2", "C1", &code).unwrap();

    assert!(holds(&state, "C1", &code));
    assert!(!holds(&state, "B2", &code));
    assert_eq!(state.caller(), Some("A1"));

    let event = state.events().last().unwrap();
    assert_eq!(event.tag, EventTag::ForceShift);
    assert_eq!(event.detail, format!("Clean-up; shifted {code} from B2 to C1."));
}

#[test]
fn test_force_shift_rejects_card_not_held() {
    let mut state = setup(42);

    let absent = state
        .hand("B1")
        .unwrap()
        .first()
        .copied()
        .unwrap()
        .to_string();

    // A2 cannot hold B1's card; hands are disjoint.
    let err = state.force_shift("A2", "B1", &absent).unwrap_err();
    assert!(matches!(err, GameError::CardNotHeld { .. }));
}

// === Event log ===

#[test]
fn test_event_log_is_ordered_and_exportable() {
    let mut state = setup(42);

    let target = state.hand("A2").unwrap()[0].to_string();
    state.call("A1", "A2", &target).unwrap();

    let tags: Vec<EventTag> = state.events().iter().map(|e| e.tag).collect();
    assert_eq!(
        tags,
        [EventTag::Initial, EventTag::CallerSet, EventTag::Call]
    );

    let json = serde_json::to_string(state.events()).unwrap();
    assert!(json.contains("CALLER_SET"));
    assert!(json.contains("Caller set to A1."));
}
