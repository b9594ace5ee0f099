//! The nine-pit partition of the 54-card deck.
//!
//! Every card belongs to exactly one pit, statically: twos through sevens of
//! a suit form that suit's minor pit, nines through aces its major pit, and
//! the four eights plus both jokers form the special Eights pit. The full
//! deck is derived from the pit tables, so the nine pits partition the deck
//! by construction.
//!
//! Classification is immutable catalog data, never derived from game state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{Card, Joker, Rank, Suit};

/// Number of cards in every pit.
pub const PIT_SIZE: usize = 6;

/// Number of cards in the full deck (nine pits of six).
pub const DECK_SIZE: usize = 54;

/// One of the nine fixed pits.
///
/// ## Example
///
/// ```
/// use pitcall::cards::{Card, Pit};
///
/// let card: Card = "2H".parse().unwrap();
/// assert_eq!(Pit::of(card).to_string(), "MINOR_HEARTS");
/// assert!(Pit::of(card).members().contains(&card));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pit {
    /// Ranks 2-7 of a suit.
    Minor(Suit),
    /// Ranks 9, 10, J, Q, K, A of a suit.
    Major(Suit),
    /// The four eights and both jokers.
    Eights,
}

impl Pit {
    /// All nine pits in catalog order.
    pub const ALL: [Pit; 9] = [
        Pit::Minor(Suit::Hearts),
        Pit::Minor(Suit::Diamonds),
        Pit::Minor(Suit::Spades),
        Pit::Minor(Suit::Clubs),
        Pit::Major(Suit::Hearts),
        Pit::Major(Suit::Diamonds),
        Pit::Major(Suit::Spades),
        Pit::Major(Suit::Clubs),
        Pit::Eights,
    ];

    /// Classify a card into its pit.
    ///
    /// Total: every `Card` value is a catalog member, so every card has
    /// exactly one pit.
    #[must_use]
    pub const fn of(card: Card) -> Pit {
        match card {
            Card::Suited { rank, suit } => match rank {
                Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six | Rank::Seven => {
                    Pit::Minor(suit)
                }
                Rank::Eight => Pit::Eights,
                Rank::Nine | Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => {
                    Pit::Major(suit)
                }
            },
            Card::Joker(_) => Pit::Eights,
        }
    }

    /// The six member cards of this pit, in catalog order.
    #[must_use]
    pub fn members(self) -> [Card; PIT_SIZE] {
        match self {
            Pit::Minor(suit) => Rank::MINOR.map(|rank| Card::suited(rank, suit)),
            Pit::Major(suit) => Rank::MAJOR.map(|rank| Card::suited(rank, suit)),
            Pit::Eights => [
                Card::suited(Rank::Eight, Suit::Hearts),
                Card::suited(Rank::Eight, Suit::Diamonds),
                Card::suited(Rank::Eight, Suit::Spades),
                Card::suited(Rank::Eight, Suit::Clubs),
                Card::Joker(Joker::Black),
                Card::Joker(Joker::Red),
            ],
        }
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit_name = |suit: Suit| match suit {
            Suit::Hearts => "HEARTS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Spades => "SPADES",
            Suit::Clubs => "CLUBS",
        };
        match self {
            Pit::Minor(suit) => write!(f, "MINOR_{}", suit_name(*suit)),
            Pit::Major(suit) => write!(f, "MAJOR_{}", suit_name(*suit)),
            Pit::Eights => write!(f, "EIGHTS"),
        }
    }
}

/// The full 54-card deck: the nine pits flattened in catalog order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Pit::ALL.iter().flat_map(|pit| pit.members()).collect()
}
