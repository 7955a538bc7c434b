use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::Board;
use super::card::{CardOwner, PLAYERS};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    // Indexed by seat, Player1 first
    pub scores: [u32; 4],
    // Lowest total, shared by everyone in `winners`
    pub winner_score: u32,
    pub winners: Vec<CardOwner>,
}

impl PlayerScore {
    pub fn from_scores(scores: [u32; 4]) -> Self {
        let winner_score = scores.iter().copied().min().unwrap_or_default();
        let winners = PLAYERS
            .iter()
            .zip(scores.iter())
            .filter(|(_, score)| **score == winner_score)
            .map(|(player, _)| *player)
            .collect();
        PlayerScore {
            scores,
            winner_score,
            winners,
        }
    }

    pub fn score(&self, player: CardOwner) -> Option<u32> {
        player.seat().map(|seat| self.scores[seat])
    }
}

impl Board {
    /// Points for every card `player` still holds.
    pub fn score_player(&self, player: CardOwner) -> u32 {
        self.cards_owned_by(player).map(|c| c.rank.points()).sum()
    }

    pub fn calculate_player_score(&mut self) -> &PlayerScore {
        let mut scores = [0; 4];
        for (seat, player) in PLAYERS.iter().enumerate() {
            scores[seat] = self.score_player(*player);
        }
        let result = PlayerScore::from_scores(scores);
        if self.scores.as_ref() != Some(&result) {
            info!(scores = ?result.scores, winners = ?result.winners, "Scores calculated");
        }
        self.scores.insert(result)
    }

    /// Scores from the last `calculate_player_score`.
    pub fn player_score(&self) -> Option<&PlayerScore> {
        self.scores.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hundredone::card::{Rank, Suit};

    #[derive(Debug)]
    struct ScoreScenario {
        name: &'static str,
        hand: Vec<(Suit, Rank)>,
        expected_score: u32,
    }

    #[test]
    fn test_scoring() {
        let scenarios = [
            ScoreScenario {
                name: "six and king",
                hand: vec![(Suit::Clubs, Rank::Six), (Suit::Hearts, Rank::King)],
                expected_score: 10,
            },
            ScoreScenario {
                name: "nines are free",
                hand: vec![(Suit::Spades, Rank::Nine), (Suit::Diamonds, Rank::Nine)],
                expected_score: 0,
            },
            ScoreScenario {
                name: "ace ten jack queen eight seven",
                hand: vec![
                    (Suit::Spades, Rank::Ace),
                    (Suit::Spades, Rank::Ten),
                    (Suit::Spades, Rank::Jack),
                    (Suit::Spades, Rank::Queen),
                    (Suit::Spades, Rank::Eight),
                    (Suit::Spades, Rank::Seven),
                ],
                expected_score: 11 + 10 + 2 + 3 + 8 + 7,
            },
            ScoreScenario {
                name: "empty hand",
                hand: vec![],
                expected_score: 0,
            },
        ];

        for scenario in scenarios {
            let mut board = Board::with_seed(1);
            for (suit, rank) in &scenario.hand {
                let id = board.card(*suit, *rank, false).unwrap().id;
                board.card_mut(id).unwrap().owner = CardOwner::Player2;
            }
            assert_eq!(
                board.score_player(CardOwner::Player2),
                scenario.expected_score,
                "Scenario: {}",
                scenario.name
            );
        }
    }

    #[test]
    fn test_lowest_score_wins_and_ties_are_shared() {
        let score = PlayerScore::from_scores([12, 4, 30, 4]);
        assert_eq!(score.winner_score, 4);
        assert_eq!(score.winners, vec![CardOwner::Player2, CardOwner::Player4]);
        assert_eq!(score.score(CardOwner::Player3), Some(30));
        assert_eq!(score.score(CardOwner::Deck), None);
    }

    #[test]
    fn test_calculate_player_score_ignores_deck_and_table() {
        let mut board = Board::with_seed(1);
        let id = board.card(Suit::Hearts, Rank::Ace, false).unwrap().id;
        board.card_mut(id).unwrap().owner = CardOwner::Player1;
        let score = board.calculate_player_score().clone();
        assert_eq!(score.scores, [11, 0, 0, 0]);
        assert_eq!(
            score.winners,
            vec![CardOwner::Player2, CardOwner::Player3, CardOwner::Player4]
        );
        assert_eq!(board.player_score(), Some(&score));
    }
}
