use serde::{Deserialize, Serialize};

use super::board::Board;
use super::card::CardOwner;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    #[default]
    Deal,
    Shuffle,
    Play,
    Draw,
    Skip,
    ShowPlayable,
    HidePlayable,
    Score,
    GameOver,
    Message,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    #[default]
    Deck,
    Hand,
    Table,
    Score,
    Message,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub change_type: ChangeType,
    #[serde(rename(serialize = "id", deserialize = "id"))]
    pub object_id: i32,
    pub source: CardOwner,
    pub dest: Location,
    pub player: Option<CardOwner>,
    pub offset: usize,
    pub length: usize,
    pub start_score: u32,
    pub end_score: u32,
    pub message: Option<String>,
}

/// A card whose owner differs between the pre-step snapshot and the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTransition {
    pub card_id: i32,
    pub from: CardOwner,
    pub to: CardOwner,
}

impl Board {
    /// Cards that moved during the last step, in storage order.
    pub fn owner_transitions(&self) -> Vec<OwnerTransition> {
        self.cards
            .iter()
            .filter_map(|card| {
                let before = self.snapshot.iter().find(|c| c.id == card.id)?;
                if before.owner == card.owner {
                    return None;
                }
                Some(OwnerTransition {
                    card_id: card.id,
                    from: before.owner,
                    to: card.owner,
                })
            })
            .collect()
    }

    pub(crate) fn take_snapshot(&mut self) {
        self.snapshot = self.cards.clone();
    }

    #[inline]
    pub(crate) fn reset_changes(&mut self) {
        self.changes = vec![vec![]];
    }

    #[inline]
    pub(crate) fn new_change(&mut self) -> usize {
        self.changes.push(vec![]);
        self.changes.len() - 1
    }

    #[inline]
    pub(crate) fn add_change(&mut self, index: usize, change: Change) {
        if self.no_changes {
            return;
        }
        self.changes[index].push(change);
    }

    /// Appends to the most recent animation group.
    #[inline]
    pub(crate) fn push_change(&mut self, change: Change) {
        if self.changes.is_empty() {
            self.changes = vec![vec![]];
        }
        let index = self.changes.len() - 1;
        self.add_change(index, change);
    }

    pub(crate) fn show_playable(&mut self) {
        if self.no_changes {
            return;
        }
        let change_index = self.new_change();
        match self.human_seat() {
            Some(human) if self.deliverer == human && !self.ended => {
                for id in self.valid_moves(human) {
                    self.add_change(
                        change_index,
                        Change {
                            change_type: ChangeType::ShowPlayable,
                            object_id: id,
                            source: human,
                            dest: Location::Hand,
                            player: Some(human),
                            ..Default::default()
                        },
                    );
                }
            }
            _ => self.hide_playable(change_index),
        }
        self.show_message();
    }

    fn hide_playable(&mut self, change_index: usize) {
        let Some(human) = self.human_seat() else {
            return;
        };
        let ids: Vec<i32> = self.cards_owned_by(human).map(|c| c.id).collect();
        for id in ids {
            self.add_change(
                change_index,
                Change {
                    change_type: ChangeType::HidePlayable,
                    object_id: id,
                    source: human,
                    dest: Location::Hand,
                    player: Some(human),
                    ..Default::default()
                },
            );
        }
    }

    fn show_message(&mut self) {
        let message = if self.ended {
            "Game over".to_string()
        } else if Some(self.deliverer) == self.human_seat() {
            "You may play a card".to_string()
        } else {
            format!("{} is playing", self.deliverer.display_name())
        };
        let index = self.new_change();
        self.add_change(
            index,
            Change {
                change_type: ChangeType::Message,
                object_id: -1,
                dest: Location::Message,
                message: Some(message),
                ..Default::default()
            },
        );
    }
}
