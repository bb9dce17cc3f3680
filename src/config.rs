use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mahjong::SEATS;

const DEFAULT_DRAW_DELAY_MS: u32 = 800;
const DEFAULT_DISCARD_DELAY_MS: u32 = 800;

/// Mahjong table settings supplied by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Seat controlled by the local player. The dealer is always seat 0.
    pub human_seat: usize,
    /// Pause before a computer seat draws.
    pub draw_delay_ms: u32,
    /// Pause between a computer seat's draw and its discard.
    pub discard_delay_ms: u32,
    /// Fixed shuffle seed; `None` draws one from the platform RNG.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            human_seat: 0,
            draw_delay_ms: DEFAULT_DRAW_DELAY_MS,
            discard_delay_ms: DEFAULT_DISCARD_DELAY_MS,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_seat >= SEATS {
            return Err(ConfigError::SeatOutOfRange(self.human_seat));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = TableConfig::from_json("{}").unwrap();

        assert_eq!(config, TableConfig::default());
        assert_eq!(config.draw_delay_ms, 800);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = TableConfig::from_json(r#"{"human_seat": 2, "seed": 42}"#).unwrap();

        assert_eq!(config.human_seat, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.discard_delay_ms, 800);
    }

    #[test]
    fn out_of_range_seat_is_rejected() {
        let err = TableConfig::from_json(r#"{"human_seat": 4}"#).unwrap_err();

        assert!(matches!(err, ConfigError::SeatOutOfRange(4)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = TableConfig::from_json("{human_seat").unwrap_err();

        assert!(err.to_string().contains("invalid table config json"));
    }
}
