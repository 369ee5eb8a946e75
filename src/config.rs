use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::Player;

/// Which verdict stands when one placement completes both a line of four
/// (or more) and a line of exactly three on different axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// Any winning axis wins, even if another axis has exactly three.
    #[default]
    WinFirst,
    /// Any axis of exactly three loses, even if another axis has four.
    LoseFirst,
}

/// Per-session options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Player to move after `new`/`reset`.
    pub first_player: Player,
    pub precedence: Precedence,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::White,
            precedence: Precedence::WinFirst,
        }
    }
}

impl GameConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.first_player, Player::White);
        assert_eq!(config.precedence, Precedence::WinFirst);
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{"precedence": "lose_first"}"#).unwrap();
        assert_eq!(config.first_player, Player::White);
        assert_eq!(config.precedence, Precedence::LoseFirst);

        let config = GameConfig::from_json(r#"{"firstPlayer": "black"}"#).unwrap();
        assert_eq!(config.first_player, Player::Black);
        assert_eq!(config.precedence, Precedence::WinFirst);

        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_values() {
        let err = GameConfig::from_json(r#"{"firstPlayer": "red"}"#).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config:"));
    }
}
