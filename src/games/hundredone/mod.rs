/*
Game: 101 (Sto Odno)
A thirty-six card shedding game for four players. Match the suit or rank of
the top card on the table, Queens go on anything. Aces skip a player, Kings,
Sevens and Sixes make the next player draw four, two or one card and skip
their turn. The game stops as soon as someone plays their last card or the
deck runs out, and the lowest total of cards left in hand wins.
*/

pub mod board;
pub mod card;
pub mod changes;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod state;

// Re-export the main types
pub use board::{Board, HAND_SIZE};
pub use card::{Card, CardOwner, Rank, Suit, DECK_SIZE, PLAYERS};
pub use changes::{Change, ChangeType, Location, OwnerTransition};
pub use error::GameError;
pub use scoring::PlayerScore;
pub use state::Phase;

pub const GAME_DESCRIPTION: &str = "\
The goal of the game is to score the least number of points. The game uses a
deck of 36 cards and four players. The first deliverer is chosen by lot. The
deck is shuffled and 5 cards are dealt to each player; the rest of the deck
stays face down in the middle of the table.

The deliverer opens with a card from their hand. Play continues with the
player to their right, who must put down a card of the same suit or the same
rank as the top card of the table. Queens can be put on anything. A player
with no matching card takes one card from the deck and passes.

Aces skip the next player. Kings make the next player take four cards from
the deck, Sevens two and Sixes one, and that player loses their turn.

The game ends when a player puts down their last card or the deck runs out.
Cards left in hand score: Ace 11, Ten 10, Eight 8, Seven 7, Six 6, King 4,
Queen 3, Jack 2, Nine 0.";
