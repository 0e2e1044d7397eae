use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deck::{Deck, DrawError};
use crate::hand::{Hand, Score};
use crate::player::Player;

/// House rule: the dealer draws below 17 and on a soft 17, and stands on
/// any hard 17 or better.
pub fn dealer_should_draw(hand: &Hand) -> bool {
    let score = hand.score();
    score.total < 17 || (score.total == 17 && score.is_soft)
}

/// Classification of a finished round, exactly one per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    PlayerBustLoss,
    DealerBustWin,
    PlayerBlackjackWin,
    DealerBlackjackLoss,
    PushBothBlackjack,
    PlayerWin,
    DealerWin,
    Tie,
}

impl Outcome {
    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            Outcome::DealerBustWin | Outcome::PlayerBlackjackWin | Outcome::PlayerWin
        )
    }

    pub fn is_player_loss(self) -> bool {
        matches!(
            self,
            Outcome::PlayerBustLoss | Outcome::DealerBlackjackLoss | Outcome::DealerWin
        )
    }

    pub fn is_push(self) -> bool {
        matches!(self, Outcome::PushBothBlackjack | Outcome::Tie)
    }
}

/// Classify a round from its final scores. Naturals are checked before
/// busts because a natural ends the round before any further draw can
/// happen; busts are checked before the plain comparison.
pub fn resolve_outcome(
    player: Score,
    dealer: Score,
    player_natural: bool,
    dealer_natural: bool,
) -> Outcome {
    if player_natural && dealer_natural {
        return Outcome::PushBothBlackjack;
    }
    if player_natural {
        return Outcome::PlayerBlackjackWin;
    }
    if dealer_natural {
        return Outcome::DealerBlackjackLoss;
    }
    if player.total > 21 {
        return Outcome::PlayerBustLoss;
    }
    if dealer.total > 21 {
        return Outcome::DealerBustWin;
    }
    match player.total.cmp(&dealer.total) {
        Ordering::Greater => Outcome::PlayerWin,
        Ordering::Less => Outcome::DealerWin,
        Ordering::Equal => Outcome::Tie,
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error("round already settled")]
    RoundOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    PlayerTurn,
    Settled,
}

/// One round of play against the dealer: a strict linear sequence of
/// draw, score and decide steps over a deck owned by the round. The
/// presentation layer may pause between calls for pacing, but every draw's
/// mutation completes before the next one starts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    deck: Deck,
    player: Player,
    dealer: Player,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl Round {
    /// Deal the opening hands (player, dealer, player, dealer) from a
    /// fresh deck. Naturals settle the round immediately.
    pub fn begin(player_name: &str, seed: u64) -> Result<Self, RoundError> {
        let mut round = Round {
            deck: Deck::standard(seed),
            player: Player::new(player_name),
            dealer: Player::dealer(),
            phase: Phase::PlayerTurn,
            outcome: None,
        };

        round.deck.draw(round.player.hand_mut())?;
        round.deck.draw(round.dealer.hand_mut())?;
        round.deck.draw(round.player.hand_mut())?;
        round.deck.draw(round.dealer.hand_mut())?;

        let player_natural = round.player.hand().is_natural();
        let dealer_natural = round.dealer.hand().is_natural();
        if player_natural || dealer_natural {
            round.settle(resolve_outcome(
                round.player.hand().score(),
                round.dealer.hand().score(),
                player_natural,
                dealer_natural,
            ));
        }
        Ok(round)
    }

    /// Draw one card for the player. A bust settles the round; anything
    /// else leaves the player free to hit again or stand.
    pub fn hit(&mut self) -> Result<Score, RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::RoundOver);
        }
        self.deck.draw(self.player.hand_mut())?;
        let score = self.player.hand().score();
        if score.total > 21 {
            self.settle(Outcome::PlayerBustLoss);
        }
        Ok(score)
    }

    /// The player stands: the dealer draws until the house rule says stop,
    /// then the round resolves. Naturals were already settled at the deal,
    /// so only bust and score comparison remain.
    pub fn stand(&mut self) -> Result<Outcome, RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::RoundOver);
        }
        while dealer_should_draw(self.dealer.hand()) {
            self.deck.draw(self.dealer.hand_mut())?;
        }
        let outcome = resolve_outcome(
            self.player.hand().score(),
            self.dealer.hand().score(),
            false,
            false,
        );
        self.settle(outcome);
        Ok(outcome)
    }

    fn settle(&mut self, outcome: Outcome) {
        self.phase = Phase::Settled;
        self.outcome = Some(outcome);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// Cumulative win/loss counters the persistence collaborator stores
/// between rounds. The engine only increments them; it never reads or
/// writes any storage itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tally {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        if outcome.is_push() {
            self.ties += 1;
        } else if outcome.is_player_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}
