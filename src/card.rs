use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn initial(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A single playing card. Rank runs 1 (Ace) through 13 (King) and is fixed
/// at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((1..=13).contains(&rank), "rank out of range: {rank}");
        Card { rank, suit }
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Base point value: face cards count 10, the Ace counts 1 here and is
    /// promoted to 11 only while scoring a hand.
    pub fn point_value(self) -> u8 {
        self.rank.min(10)
    }

    pub fn is_ace(self) -> bool {
        self.rank == 1
    }

    pub fn display_label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[usize::from(self.rank) - 1]
    }

    /// Two-character code for the card-image collaborator, e.g. "AS" or
    /// "QH". The ten is encoded as '0' to keep the code a fixed width.
    pub fn asset_code(self) -> String {
        let rank = match self.rank {
            1 => 'A',
            10 => '0',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => char::from(b'0' + n),
        };
        format!("{}{}", rank, self.suit.initial())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.display_label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(Card::new(1, Suit::Spades).point_value(), 1);
        assert_eq!(Card::new(7, Suit::Hearts).point_value(), 7);
        assert_eq!(Card::new(10, Suit::Clubs).point_value(), 10);
        assert_eq!(Card::new(11, Suit::Diamonds).point_value(), 10);
        assert_eq!(Card::new(12, Suit::Spades).point_value(), 10);
        assert_eq!(Card::new(13, Suit::Hearts).point_value(), 10);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Card::new(1, Suit::Spades).display_label(), "A");
        assert_eq!(Card::new(2, Suit::Spades).display_label(), "2");
        assert_eq!(Card::new(10, Suit::Spades).display_label(), "10");
        assert_eq!(Card::new(11, Suit::Spades).display_label(), "J");
        assert_eq!(Card::new(12, Suit::Spades).display_label(), "Q");
        assert_eq!(Card::new(13, Suit::Spades).display_label(), "K");
    }

    #[test]
    fn test_asset_codes() {
        assert_eq!(Card::new(1, Suit::Spades).asset_code(), "AS");
        assert_eq!(Card::new(10, Suit::Hearts).asset_code(), "0H");
        assert_eq!(Card::new(12, Suit::Diamonds).asset_code(), "QD");
        assert_eq!(Card::new(5, Suit::Clubs).asset_code(), "5C");
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(1, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(10, Suit::Hearts).to_string(), "10♥");
    }

    #[test]
    fn test_only_aces_are_aces() {
        assert!(Card::new(1, Suit::Clubs).is_ace());
        assert!(!Card::new(11, Suit::Clubs).is_ace());
    }
}
