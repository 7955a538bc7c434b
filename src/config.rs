use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colour of the card backs the renderer draws for face-down cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CardBack {
    Blue,
    Red,
    #[default]
    Green,
    Yellow,
}

impl CardBack {
    pub fn texture_handle(&self) -> &'static str {
        match self {
            CardBack::Blue => "card-back-blue",
            CardBack::Red => "card-back-red",
            CardBack::Green => "card-back-green",
            CardBack::Yellow => "card-back-yellow",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    // Seed for the board RNG, entropy when missing
    pub seed: Option<u64>,
    // Whether Player1 waits for input instead of being played by the AI
    pub human_player: bool,
    pub card_back: CardBack,
    // Directory the card face textures live in
    pub asset_root: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            human_player: true,
            card_back: CardBack::default(),
            asset_root: "data/assets".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        GameConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
