use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// A seat at the table. The dealer is a player with a fixed name; each
/// player owns its hand exclusively.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn dealer() -> Self {
        Self::new("Dealer")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    #[test]
    fn test_player_starts_with_empty_hand() {
        let player = Player::new("Ada");
        assert_eq!(player.name(), "Ada");
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_dealer_name() {
        assert_eq!(Player::dealer().name(), "Dealer");
    }

    #[test]
    fn test_hand_is_owned_by_player() {
        let mut player = Player::new("Ada");
        player.hand_mut().push(Card::new(8, Suit::Clubs));
        assert_eq!(player.hand().len(), 1);
    }
}
