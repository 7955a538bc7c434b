use tracing::{debug, info};

use super::board::Board;
use super::card::{Card, CardOwner, Rank};
use super::changes::{Change, ChangeType, Location};

impl Board {
    /// A card may be played on an empty table, on a card of the same suit or
    /// rank, and a Queen may always be played.
    pub fn move_is_valid(&self, card: &Card) -> bool {
        match self.top_of_table() {
            None => true,
            Some(top) => {
                card.suit == top.suit || card.rank == top.rank || card.rank == Rank::Queen
            }
        }
    }

    /// Ids of the cards `owner` may legally play, in storage order.
    pub fn valid_moves(&self, owner: CardOwner) -> Vec<i32> {
        self.cards_owned_by(owner)
            .filter(|c| self.move_is_valid(c))
            .map(|c| c.id)
            .collect()
    }

    pub fn assign_next_deliverer(&mut self) {
        self.deliverer = self.deliverer.next_deliverer();
    }

    /// Plays a card from its owner's hand to the table and applies the
    /// rank's effect. Ends the game instead when the deck is empty.
    ///
    /// Panics when the card is unknown, not in a player's hand, or cannot be
    /// played on the current table.
    pub fn make_move(&mut self, card_id: i32) {
        if self.deck_is_empty() {
            info!("Deck is empty, ending the game");
            self.ended = true;
            return;
        }

        let card = match self.card_by_id(card_id) {
            Ok(card) => card.clone(),
            Err(err) => panic!("{}", err),
        };
        assert!(
            card.owner.is_player(),
            "card {} is held by {:?}, not by a player",
            card_id,
            card.owner
        );
        assert!(
            self.move_is_valid(&card),
            "card {} cannot be played on the current table",
            card_id
        );

        let player = card.owner;
        if self.hand_len(player) == 1 {
            info!(player = ?player, "last card played");
            self.ended = true;
        }

        if let Ok(played) = self.card_mut(card_id) {
            played.owner = CardOwner::Table;
        }
        self.table.push(card_id);
        debug!(player = ?player, card = %card, "card played");
        let play_index = self.new_change();
        self.add_change(
            play_index,
            Change {
                change_type: ChangeType::Play,
                object_id: card_id,
                source: player,
                dest: Location::Table,
                player: Some(player),
                offset: self.table.len() - 1,
                length: self.table.len(),
                ..Default::default()
            },
        );

        match card.rank {
            Rank::Ace => {
                self.assign_next_deliverer();
                self.record_skip(self.deliverer);
                self.assign_next_deliverer();
            }
            Rank::King | Rank::Seven | Rank::Six => {
                self.assign_next_deliverer();
                let penalised = self.deliverer;
                self.new_change();
                for _ in 0..card.rank.draw_penalty() {
                    if self.get_deck_card(penalised).is_none() {
                        break;
                    }
                }
                self.record_skip(penalised);
                self.assign_next_deliverer();
            }
            _ => self.assign_next_deliverer(),
        }

        self.pending_auto_move = !self.is_human(self.deliverer);
        self.turn += 1;
    }

    /// Plays the first valid card `owner` holds. Without one the player draws
    /// from the deck and passes, or ends the game when the deck is empty.
    pub fn move_card_ai(&mut self, owner: CardOwner) {
        let playable = self
            .cards_owned_by(owner)
            .find(|c| self.move_is_valid(c))
            .map(|c| c.id);

        match playable {
            Some(card_id) => self.make_move(card_id),
            None => self.draw_and_pass(owner),
        }
    }

    pub(crate) fn draw_and_pass(&mut self, owner: CardOwner) {
        self.new_change();
        if self.get_deck_card(owner).is_none() {
            info!(player = ?owner, "Nothing to play and the deck is empty, ending the game");
            self.ended = true;
            return;
        }
        self.assign_next_deliverer();
        self.pending_auto_move = !self.is_human(self.deliverer);
        self.turn += 1;
    }

    fn record_skip(&mut self, player: CardOwner) {
        debug!(player = ?player, "turn skipped");
        self.push_change(Change {
            change_type: ChangeType::Skip,
            object_id: -1,
            source: player,
            dest: Location::Message,
            player: Some(player),
            message: Some(format!("{} skips a turn", player.display_name())),
            ..Default::default()
        });
    }
}
