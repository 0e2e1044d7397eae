use serde::{Deserialize, Serialize};

use crate::card::Card;

/// The value of a hand. `is_soft` is true while at least one Ace is still
/// counted as 11.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub total: u16,
    pub is_soft: bool,
}

/// Score a set of cards. Every Ace starts at 11; while the total exceeds 21
/// and an Ace is still counted as 11, one Ace drops to 1. Which Ace drops
/// first does not matter, they are fungible. The total is allowed to end
/// above 21; detecting a bust is the caller's job.
pub fn score(cards: &[Card]) -> Score {
    let mut total: u16 = 0;
    let mut soft_aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
            total += 11;
        } else {
            total += u16::from(card.point_value());
        }
    }

    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    Score {
        total,
        is_soft: soft_aces > 0,
    }
}

/// An append-only sequence of cards belonging to one player.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    /// A natural: exactly two cards totaling 21, dealt before any draw.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score().total == 21
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand_of(ranks: &[u8]) -> Vec<Card> {
        ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Spades))
            .collect()
    }

    #[test]
    fn test_score_ace_and_king() {
        let score = score(&hand_of(&[1, 13]));
        assert_eq!(score.total, 21);
        assert!(score.is_soft);
    }

    #[test]
    fn test_score_two_and_three() {
        let score = score(&hand_of(&[2, 3]));
        assert_eq!(score.total, 5);
        assert!(!score.is_soft);
    }

    #[test]
    fn test_score_two_aces_and_nine() {
        // 11 + 11 + 9 = 31, one Ace drops: 21 with one Ace still soft.
        let score = score(&hand_of(&[1, 1, 9]));
        assert_eq!(score.total, 21);
        assert!(score.is_soft);
    }

    #[test]
    fn test_score_three_aces_and_nine() {
        // 11 + 11 + 11 + 9 = 42, all three Aces drop: hard 12.
        let score = score(&hand_of(&[1, 1, 1, 9]));
        assert_eq!(score.total, 12);
        assert!(!score.is_soft);
    }

    #[test]
    fn test_score_empty_hand() {
        let score = score(&[]);
        assert_eq!(score.total, 0);
        assert!(!score.is_soft);
    }

    #[test]
    fn test_score_busted_hand_is_never_soft() {
        // A A K Q = 42, both Aces drop and the hand still busts at 22.
        let score = score(&hand_of(&[1, 1, 13, 12]));
        assert_eq!(score.total, 22);
        assert!(!score.is_soft);
    }

    #[test]
    fn test_score_hard_ace() {
        // 11 + 6 + 9 = 26, the Ace drops to 1: hard 16.
        let score = score(&hand_of(&[1, 6, 9]));
        assert_eq!(score.total, 16);
        assert!(!score.is_soft);
    }

    #[test]
    fn test_is_natural() {
        let mut hand = Hand::new();
        hand.push(Card::new(1, Suit::Hearts));
        hand.push(Card::new(13, Suit::Spades));
        assert!(hand.is_natural());
    }

    #[test]
    fn test_three_card_21_is_not_natural() {
        let mut hand = Hand::new();
        hand.push(Card::new(7, Suit::Hearts));
        hand.push(Card::new(7, Suit::Spades));
        hand.push(Card::new(7, Suit::Clubs));
        assert_eq!(hand.score().total, 21);
        assert!(!hand.is_natural());
    }

    #[test]
    fn test_two_card_20_is_not_natural() {
        let mut hand = Hand::new();
        hand.push(Card::new(13, Suit::Hearts));
        hand.push(Card::new(12, Suit::Spades));
        assert!(!hand.is_natural());
    }

    #[test]
    fn test_hand_grows_by_appending() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.push(Card::new(4, Suit::Clubs));
        hand.push(Card::new(9, Suit::Diamonds));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.cards()[0].rank(), 4);
        assert_eq!(hand.score().total, 13);
    }
}
