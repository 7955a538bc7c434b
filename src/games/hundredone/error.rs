use thiserror::Error;

use super::card::{CardOwner, Rank, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no {rank:?} of {suit:?} on the board")]
    CardNotFound { suit: Suit, rank: Rank },

    #[error("card {0} does not exist")]
    CardIdNotFound(i32),

    #[error("card {card_id} is held by {owner:?}, not by the player to move")]
    CardNotInHand { card_id: i32, owner: CardOwner },

    #[error("it is {0:?}'s turn")]
    NotPlayersTurn(CardOwner),

    #[error("card {0} cannot be played on the current table")]
    IllegalMove(i32),

    #[error("the game is over")]
    GameOver,
}
