//! Engine Configuration

mod env;

use serde::{Deserialize, Serialize};

use crate::card::MAX_CARD_SIZE;
use crate::contracts::DEFAULT_ORG_PRESTIGE;
use crate::error::{CoreError, Result};
use crate::fight::SynthesisMode;

pub use env::{config_from_env, ENGINE_CONFIG_PATH_ENV};

/// Tunables for a weekly run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Synthesize missing attributes from unseeded entropy (기본: false)
    pub legacy_non_deterministic_synthesis: bool,
    /// Organisation prestige used when scoring offers (기본: 50)
    pub org_prestige: f64,
    /// Picks per card, 1..=5 (기본: 5)
    pub max_card_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            legacy_non_deterministic_synthesis: false,
            org_prestige: DEFAULT_ORG_PRESTIGE,
            max_card_size: MAX_CARD_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.org_prestige.is_finite() || self.org_prestige < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "org_prestige must be a non-negative number, got {}",
                self.org_prestige
            )));
        }
        if !(1..=MAX_CARD_SIZE).contains(&self.max_card_size) {
            return Err(CoreError::InvalidConfig(format!(
                "max_card_size must be between 1 and {MAX_CARD_SIZE}, got {}",
                self.max_card_size
            )));
        }
        Ok(())
    }

    pub fn synthesis_mode(&self) -> SynthesisMode {
        SynthesisMode::from_legacy_flag(self.legacy_non_deterministic_synthesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(!config.legacy_non_deterministic_synthesis);
        assert_eq!(config.org_prestige, 50.0);
        assert_eq!(config.max_card_size, 5);
        assert_eq!(config.synthesis_mode(), SynthesisMode::Seeded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{"legacy_non_deterministic_synthesis": true}"#).unwrap();
        assert_eq!(config.synthesis_mode(), SynthesisMode::LegacyAmbient);
        assert_eq!(config.org_prestige, 50.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let negative = EngineConfig { org_prestige: -1.0, ..Default::default() };
        assert!(matches!(negative.validate(), Err(CoreError::InvalidConfig(_))));

        let oversized = EngineConfig { max_card_size: 6, ..Default::default() };
        assert!(oversized.validate().is_err());

        let empty = EngineConfig { max_card_size: 0, ..Default::default() };
        assert!(empty.validate().is_err());
    }
}
