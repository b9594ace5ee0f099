//! Error taxonomy for protocol operations.
//!
//! Every variant is a precondition violation raised synchronously to the
//! driver; the engine never retries or recovers, and a failed operation
//! leaves state untouched. Advisory pit-burn heuristics are *not* errors
//! (see the call protocol).

use crate::cards::{Card, ParseCardError};

/// Reason an operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The named player is not in the roster (or no roster is registered).
    #[error("player `{0}` is not registered")]
    UnknownPlayer(String),

    /// The card code does not name any of the 54 catalog cards.
    #[error(transparent)]
    UnknownCard(#[from] ParseCardError),

    /// The acting player is not the current caller.
    #[error("`{0}` is not the current caller")]
    NotYourTurn(String),

    /// Calls must target a player on the opposing team.
    #[error("calls can only be made to players on the other team")]
    SameTeamCall,

    /// Passes must stay within the team.
    #[error("cards can only be passed to players on the same team")]
    CrossTeamPass,

    /// The passer must hold exactly one card.
    #[error("passer must have exactly one card to pass, holds {0}")]
    WrongHandSize(usize),

    /// The card is not in the named player's hand.
    #[error("card `{card}` not found in `{player}`'s hand")]
    CardNotHeld { player: String, card: Card },
}
