use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::types::{BotDifficulty, FirstMover, GameMode, Mark};

/// Match setup as selected in the menu (or loaded from a config file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub mode: GameMode,
    pub difficulty: BotDifficulty,
    pub first_mover: FirstMover,
    pub bot_mark: Mark,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            difficulty: BotDifficulty::Easy,
            first_mover: FirstMover::X,
            bot_mark: Mark::O,
        }
    }
}

impl Validate for MatchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.mode == GameMode::VersusBot && self.bot_mark == Mark::Empty {
            return Err("Bot mark must be X or O".to_string());
        }
        Ok(())
    }
}
