use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::Board;
use super::card::{CardOwner, PLAYERS};
use super::changes::{Change, ChangeType, Location};
use super::error::GameError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    // Shuffle the freshly generated deck
    Setup,
    // Hand five cards to each player
    Dealing,
    // The deliverer opens with the last card of their hand
    OpeningMove,
    // Waiting for the human player to pick a card
    AwaitingHuman,
    // The player to move is played by the AI
    ResolvingAi,
    // Game is over, scores not yet reported
    Scoring,
    Ended,
}

impl Board {
    /// Advances the game by one unit: a shuffle, the deal, a single move or
    /// draw, or the final scoring. The presentation layer calls this once per
    /// tick while nothing is animating and diffs `snapshot()` against
    /// `cards()` afterwards.
    pub fn step(&mut self) {
        self.take_snapshot();
        self.reset_changes();
        debug!(phase = ?self.phase, turn = self.turn, deliverer = ?self.deliverer, "step");

        match self.phase {
            Phase::Setup => {
                self.shuffle_deck();
                self.push_change(Change {
                    change_type: ChangeType::Shuffle,
                    object_id: 0,
                    dest: Location::Deck,
                    ..Default::default()
                });
                self.phase = Phase::Dealing;
                return;
            }
            Phase::Dealing => {
                self.assign_cards_to_the_players();
                self.phase = Phase::OpeningMove;
                self.show_playable();
                return;
            }
            Phase::OpeningMove => {
                let opening = self.card_by_owner(self.deliverer, true).map(|c| c.id);
                match opening {
                    Some(card_id) => self.make_move(card_id),
                    None => self.ended = true,
                }
            }
            Phase::ResolvingAi => self.move_card_ai(self.deliverer),
            Phase::AwaitingHuman => {
                if !self.valid_moves(self.deliverer).is_empty() {
                    // Wait for `play`
                    return;
                }
                self.draw_and_pass(self.deliverer);
                if !self.ended && !self.is_human(self.deliverer) {
                    self.move_card_ai(self.deliverer);
                }
            }
            Phase::Scoring => {
                self.calculate_player_score();
                self.report_scores();
                self.phase = Phase::Ended;
                return;
            }
            Phase::Ended => {
                self.calculate_player_score();
                return;
            }
        }

        self.refresh_phase();
        self.show_playable();
    }

    /// Plays a card from the human player's hand.
    pub fn play(&mut self, card_id: i32) -> Result<(), GameError> {
        if self.ended || matches!(self.phase, Phase::Scoring | Phase::Ended) {
            return Err(GameError::GameOver);
        }
        let human = match self.human_seat() {
            Some(human) if self.phase == Phase::AwaitingHuman && self.deliverer == human => human,
            _ => return Err(GameError::NotPlayersTurn(self.deliverer)),
        };
        let card = self.card_by_id(card_id)?;
        if card.owner != human {
            return Err(GameError::CardNotInHand {
                card_id,
                owner: card.owner,
            });
        }
        if !self.move_is_valid(card) {
            return Err(GameError::IllegalMove(card_id));
        }

        self.take_snapshot();
        self.reset_changes();
        self.make_move(card_id);
        self.refresh_phase();
        self.show_playable();
        Ok(())
    }

    /// Cards the human player may play right now.
    pub fn get_moves(&self) -> Vec<i32> {
        match self.human_seat() {
            Some(human) if self.phase == Phase::AwaitingHuman && self.deliverer == human => {
                self.valid_moves(human)
            }
            _ => vec![],
        }
    }

    pub(crate) fn refresh_phase(&mut self) {
        self.phase = if self.ended {
            Phase::Scoring
        } else if self.is_human(self.deliverer) {
            Phase::AwaitingHuman
        } else {
            Phase::ResolvingAi
        };
    }

    fn report_scores(&mut self) {
        let Some(scores) = self.scores.clone() else {
            return;
        };
        let index = self.new_change();
        for player in PLAYERS {
            self.add_change(
                index,
                Change {
                    change_type: ChangeType::Score,
                    object_id: -1,
                    source: player,
                    dest: Location::Score,
                    player: Some(player),
                    start_score: 0,
                    end_score: scores.score(player).unwrap_or_default(),
                    ..Default::default()
                },
            );
        }
        let index = self.new_change();
        self.add_change(
            index,
            Change {
                change_type: ChangeType::GameOver,
                object_id: 0,
                source: CardOwner::Table,
                dest: Location::Deck,
                ..Default::default()
            },
        );
    }
}
