use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info};

use super::card::{self, Card, CardOwner, Rank, Suit, DECK_SIZE, PLAYERS};
use super::changes::{Change, ChangeType, Location};
use super::error::GameError;
use super::scoring::PlayerScore;
use super::state::Phase;
use crate::config::GameConfig;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Board {
    // Every card of the game. Storage order matters: shuffling permutes it,
    // dealing and deck draws read it front to back
    pub(crate) cards: Vec<Card>,
    // Copy of `cards` taken at the start of the last step
    pub(crate) snapshot: Vec<Card>,
    // Ids of the cards played to the table, most recent last
    pub(crate) table: Vec<i32>,
    // Number of plays and draw-and-pass turns so far
    pub(crate) turn: u32,
    pub(crate) phase: Phase,
    // Player whose turn it is
    pub(crate) deliverer: CardOwner,
    pub(crate) ended: bool,
    // Set when the player to move is resolved by the AI
    pub(crate) pending_auto_move: bool,
    // Scores computed once the game is over
    pub(crate) scores: Option<PlayerScore>,
    // List of list of animations to run to get from the snapshot to the current board
    pub changes: Vec<Vec<Change>>,
    // Simulations skip building the animation list
    pub no_changes: bool,
    pub(crate) config: GameConfig,
    rng: StdRng,
}

impl Board {
    /// An empty board. `generate_deck` has to run before the first step.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Board {
            cards: Vec::with_capacity(DECK_SIZE),
            snapshot: vec![],
            table: vec![],
            turn: 0,
            phase: Phase::Setup,
            deliverer: CardOwner::Player1,
            ended: false,
            pending_auto_move: false,
            scores: None,
            changes: vec![vec![]],
            no_changes: false,
            config,
            rng,
        }
    }

    /// A board with its deck generated, ready for `step`.
    pub fn new_game(config: GameConfig) -> Self {
        let mut board = Board::new(config);
        board.generate_deck();
        board
    }

    pub fn with_seed(seed: u64) -> Self {
        Board::new_game(GameConfig::with_seed(seed))
    }

    pub fn generate_deck(&mut self) {
        assert!(self.cards.is_empty(), "deck was already generated");
        info!("Generating card deck");

        self.deliverer = PLAYERS[self.rng.gen_range(0..PLAYERS.len())];
        self.pending_auto_move = !self.is_human(self.deliverer);
        self.cards = card::deck(&self.config);
        self.snapshot = self.cards.clone();
        debug!(deliverer = ?self.deliverer, "first deliverer drawn");
    }

    pub fn shuffle_deck(&mut self) {
        info!("Shuffling game board");
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals the first five cards in storage order to Player1, the next five
    /// to Player2 and so on.
    pub fn assign_cards_to_the_players(&mut self) {
        assert_eq!(self.cards.len(), DECK_SIZE, "deck has not been generated");
        assert!(
            self.cards.iter().all(|c| c.owner == CardOwner::Deck),
            "cards were already dealt"
        );
        info!("Assigning starting cards to the players");

        let deal_index = self.new_change();
        for (seat, player) in PLAYERS.iter().enumerate() {
            for offset in 0..HAND_SIZE {
                let card = &mut self.cards[seat * HAND_SIZE + offset];
                card.owner = *player;
                let change = Change {
                    change_type: ChangeType::Deal,
                    object_id: card.id,
                    source: CardOwner::Deck,
                    dest: Location::Hand,
                    player: Some(*player),
                    offset,
                    length: HAND_SIZE,
                    ..Default::default()
                };
                self.add_change(deal_index, change);
            }
        }
    }

    /// Moves the first deck card in storage order to `owner`. Returns the id
    /// of the drawn card, `None` when the deck is empty.
    pub fn get_deck_card(&mut self, owner: CardOwner) -> Option<i32> {
        let card = self.cards.iter_mut().find(|c| c.owner == CardOwner::Deck)?;
        card.owner = owner;
        let id = card.id;
        debug!(card_id = id, ?owner, "card drawn from the deck");
        self.push_change(Change {
            change_type: ChangeType::Draw,
            object_id: id,
            source: CardOwner::Deck,
            dest: Location::Hand,
            player: Some(owner),
            ..Default::default()
        });
        Some(id)
    }

    /// First card held by `owner` in storage order, the last one with
    /// `reverse`.
    pub fn card_by_owner(&self, owner: CardOwner, reverse: bool) -> Option<&Card> {
        if reverse {
            self.cards.iter().rev().find(|c| c.owner == owner)
        } else {
            self.cards.iter().find(|c| c.owner == owner)
        }
    }

    /// Looks a card up by identity, in the pre-step snapshot with `rewind`.
    pub fn card(&self, suit: Suit, rank: Rank, rewind: bool) -> Result<&Card, GameError> {
        let cards = if rewind { &self.snapshot } else { &self.cards };
        cards
            .iter()
            .find(|c| c.suit == suit && c.rank == rank)
            .ok_or(GameError::CardNotFound { suit, rank })
    }

    pub fn card_by_id(&self, id: i32) -> Result<&Card, GameError> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or(GameError::CardIdNotFound(id))
    }

    pub(crate) fn card_mut(&mut self, id: i32) -> Result<&mut Card, GameError> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GameError::CardIdNotFound(id))
    }

    pub fn cards_owned_by(&self, owner: CardOwner) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.owner == owner)
    }

    /// The cards `player` holds, sorted by suit then rank.
    pub fn hand(&self, player: CardOwner) -> Vec<Card> {
        let mut hand: Vec<Card> = self.cards_owned_by(player).cloned().collect();
        hand.sort_by(card::human_card_sorter);
        hand
    }

    pub fn hand_len(&self, owner: CardOwner) -> usize {
        self.cards_owned_by(owner).count()
    }

    pub fn deck_len(&self) -> usize {
        self.hand_len(CardOwner::Deck)
    }

    pub fn deck_is_empty(&self) -> bool {
        self.card_by_owner(CardOwner::Deck, false).is_none()
    }

    pub fn top_of_table(&self) -> Option<&Card> {
        let id = *self.table.last()?;
        self.cards.iter().find(|c| c.id == id)
    }

    /// Ids of the cards on the table, bottom first.
    pub fn table(&self) -> &[i32] {
        &self.table
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn snapshot(&self) -> &[Card] {
        &self.snapshot
    }

    pub fn deliverer(&self) -> CardOwner {
        self.deliverer
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn pending_auto_move(&self) -> bool {
        self.pending_auto_move
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seat waiting for input, `None` when every seat is played by the AI.
    pub fn human_seat(&self) -> Option<CardOwner> {
        self.config.human_player.then_some(CardOwner::Player1)
    }

    pub(crate) fn is_human(&self, owner: CardOwner) -> bool {
        self.human_seat() == Some(owner)
    }
}
