use std::{cmp::Ordering, fmt};

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

pub const DECK_SIZE: usize = 36;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Sequence,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    #[default]
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

impl Suit {
    pub fn asset_name(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Sequence,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    #[default]
    Ace = 0,
    King = 1,
    Queen = 2,
    Jack = 3,
    Ten = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
    Six = 8,
}

impl Rank {
    /// Penalty points a card of this rank is worth when it is still in a
    /// player's hand at the end of the game.
    pub fn points(&self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Ten => 10,
            Rank::Nine => 0,
            Rank::Eight => 8,
            Rank::Seven => 7,
            Rank::Six => 6,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Jack => 2,
        }
    }

    /// Cards the next player has to take from the deck after this rank is
    /// played. Ranks with a penalty also skip the penalised player.
    pub fn draw_penalty(&self) -> usize {
        match self {
            Rank::King => 4,
            Rank::Seven => 2,
            Rank::Six => 1,
            _ => 0,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
        }
    }
}

/// Where a card currently is. Doubles as the player identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Sequence,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum CardOwner {
    #[default]
    Deck,
    Table,
    Player1,
    Player2,
    Player3,
    Player4,
}

pub const PLAYERS: [CardOwner; 4] = [
    CardOwner::Player1,
    CardOwner::Player2,
    CardOwner::Player3,
    CardOwner::Player4,
];

impl CardOwner {
    pub fn is_player(&self) -> bool {
        !matches!(self, CardOwner::Deck | CardOwner::Table)
    }

    /// Seat index 0 - 3 for players.
    pub fn seat(&self) -> Option<usize> {
        match self {
            CardOwner::Player1 => Some(0),
            CardOwner::Player2 => Some(1),
            CardOwner::Player3 => Some(2),
            CardOwner::Player4 => Some(3),
            _ => None,
        }
    }

    /// The player who moves after this one. Play runs
    /// Player1 -> Player4 -> Player3 -> Player2 -> Player1, anything that
    /// is not a player restarts at Player1.
    pub fn next_deliverer(&self) -> CardOwner {
        match self {
            CardOwner::Player1 => CardOwner::Player4,
            CardOwner::Player2 => CardOwner::Player1,
            CardOwner::Player3 => CardOwner::Player2,
            CardOwner::Player4 => CardOwner::Player3,
            _ => CardOwner::Player1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardOwner::Deck => "Deck",
            CardOwner::Table => "Table",
            CardOwner::Player1 => "You",
            CardOwner::Player2 => "West",
            CardOwner::Player3 => "North",
            CardOwner::Player4 => "East",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i32,
    pub rank: Rank,
    pub suit: Suit,
    pub owner: CardOwner,
    pub texture_main: String,
    pub texture_back: String,
}

impl Card {
    pub fn new(id: i32, rank: Rank, suit: Suit, config: &GameConfig) -> Self {
        Card {
            id,
            rank,
            suit,
            owner: CardOwner::Deck,
            texture_main: texture_for_card(&config.asset_root, rank, suit),
            texture_back: config.card_back.texture_handle().to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        };
        write!(f, "{}{}", self.rank.short_name(), suit)
    }
}

pub fn texture_for_card(asset_root: &str, rank: Rank, suit: Suit) -> String {
    format!(
        "{}/{}/card-{}-{}.png",
        asset_root,
        suit.asset_name(),
        suit.asset_name(),
        rank as i32
    )
}

/// All 36 cards in generation order (suit by suit, Ace down to Six), every
/// card in the deck.
pub fn deck(config: &GameConfig) -> Vec<Card> {
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    let mut id = 0;
    for suit in all::<Suit>() {
        for rank in all::<Rank>() {
            deck.push(Card::new(id, rank, suit, config));
            id += 1;
        }
    }
    deck
}

pub fn human_card_sorter(a: &Card, b: &Card) -> Ordering {
    match a.suit.cmp(&b.suit) {
        Ordering::Less => Ordering::Less,
        Ordering::Greater => Ordering::Greater,
        Ordering::Equal => a.rank.cmp(&b.rank),
    }
}
