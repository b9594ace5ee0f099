//! Card codes: ranks, suits, jokers, and the `Card` value type.
//!
//! Drivers speak in short wire codes (`"2H"`, `"10D"`, `"QS"`, `"JJ"`), the
//! same codes the game has always used. `Card` is the typed, `Copy` form of
//! one code; parsing is the only place an unknown code can enter the engine,
//! so every `Card` value is guaranteed to be one of the 54 catalog cards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All four suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Single-letter wire code for this suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Thirteen ranks. Twos through sevens form the minor pits, nines and above
/// the major pits; eights live in the special Eights pit with the jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Minor-pit ranks in catalog order.
    pub const MINOR: [Rank; 6] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
    ];

    /// Major-pit ranks in catalog order.
    pub const MAJOR: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Wire code for this rank (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// The two jokers, distinguished only by their wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joker {
    /// Wire code `"JJ"`.
    Black,
    /// Wire code `"JG"`.
    Red,
}

/// One of the 54 catalog cards.
///
/// ## Example
///
/// ```
/// use pitcall::cards::Card;
///
/// let nine_hearts: Card = "9H".parse().unwrap();
/// assert_eq!(nine_hearts.to_string(), "9H");
///
/// assert!("8X".parse::<Card>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A suited rank card.
    Suited { rank: Rank, suit: Suit },
    /// One of the two jokers.
    Joker(Joker),
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn suited(rank: Rank, suit: Suit) -> Self {
        Card::Suited { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { rank, suit } => write!(f, "{}{}", rank.code(), suit.letter()),
            Card::Joker(Joker::Black) => write!(f, "JJ"),
            Card::Joker(Joker::Red) => write!(f, "JG"),
        }
    }
}

/// A code that does not name any of the 54 catalog cards.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a card in the 54-card catalog")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "JJ" => return Ok(Card::Joker(Joker::Black)),
            "JG" => return Ok(Card::Joker(Joker::Red)),
            _ => {}
        }

        let mut chars = code.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_letter)
            .ok_or_else(|| ParseCardError(code.to_string()))?;
        let rank =
            Rank::from_code(chars.as_str()).ok_or_else(|| ParseCardError(code.to_string()))?;

        Ok(Card::Suited { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for code in ["2H", "7C", "8D", "9S", "10H", "JD", "QS", "KC", "AH", "JJ", "JG"] {
            let card: Card = code.parse().unwrap();
            assert_eq!(card.to_string(), code);
        }
    }

    #[test]
    fn test_parse_suited() {
        assert_eq!(
            "9H".parse::<Card>().unwrap(),
            Card::suited(Rank::Nine, Suit::Hearts)
        );
        assert_eq!(
            "10D".parse::<Card>().unwrap(),
            Card::suited(Rank::Ten, Suit::Diamonds)
        );
    }

    #[test]
    fn test_parse_jokers() {
        assert_eq!("JJ".parse::<Card>().unwrap(), Card::Joker(Joker::Black));
        assert_eq!("JG".parse::<Card>().unwrap(), Card::Joker(Joker::Red));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        for code in ["", "H", "1H", "8X", "11H", "joker", "2h", " 2H"] {
            let err = code.parse::<Card>().unwrap_err();
            assert_eq!(err, ParseCardError(code.to_string()));
        }
    }

    #[test]
    fn test_serialization() {
        let card = Card::suited(Rank::Queen, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
