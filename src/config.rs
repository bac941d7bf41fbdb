//! Tunables for the event procedures.
//!
//! Defaults reproduce the shipped game behaviour. A RON file may override any
//! subset of fields; omitted fields keep their defaults.

use crate::errors::{ConfigError, ConfigResult};
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// OT id stamped on every creature received through Wonder Trade ("WTON").
pub const WONDER_OT_ID: u32 = 0x5754_4F4E;
/// OT name stamped on every creature received through Wonder Trade.
pub const WONDER_OT_NAME: &str = "WONDER";
/// Met-location code reserved for Wonder Trade.
pub const METLOC_WONDER_TRADE: u16 = 0xFD;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub wonder_trade: WonderTradeConfig,
    pub rematch: RematchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WonderTradeConfig {
    /// Species draws per safe-species search.
    pub species_attempts: u32,
    /// End-to-end creation retries when the created creature is bad.
    pub creation_attempts: u32,
    /// Species used when every draw was rejected.
    pub fallback_species: Species,
    pub ot_id: u32,
    pub ot_name: String,
    pub met_location: u16,
}

impl Default for WonderTradeConfig {
    fn default() -> Self {
        Self {
            species_attempts: 10_000,
            creation_attempts: 50,
            fallback_species: Species::MAGIKARP,
            ot_id: WONDER_OT_ID,
            ot_name: WONDER_OT_NAME.to_string(),
            met_location: METLOC_WONDER_TRADE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RematchConfig {
    /// Highest rematch tier that may be queued before the game is cleared.
    pub max_tier_before_clear: u8,
    /// Highest rematch tier that may be queued once the game is cleared.
    pub max_tier_after_clear: u8,
    /// Replaces the computed unlock mask right before selection when set.
    /// Playtesting aid; leave unset in shipped builds.
    pub forced_unlock_mask: Option<u8>,
}

impl Default for RematchConfig {
    fn default() -> Self {
        Self {
            max_tier_before_clear: 1,
            max_tier_after_clear: 5,
            forced_unlock_mask: None,
        }
    }
}

impl EventConfig {
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: EventConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    fn validate(&self) -> ConfigResult<()> {
        let trade = &self.wonder_trade;
        if trade.species_attempts == 0 || trade.creation_attempts == 0 {
            return Err(ConfigError::Invalid(
                "wonder trade attempt bounds must be non-zero".to_string(),
            ));
        }
        if trade.fallback_species.is_none() || trade.fallback_species == Species::EGG {
            return Err(ConfigError::Invalid(format!(
                "fallback species {} is not a real species",
                trade.fallback_species
            )));
        }
        if trade.ot_name.is_empty() {
            return Err(ConfigError::Invalid("wonder trade OT name is empty".to_string()));
        }
        let rematch = &self.rematch;
        if rematch.max_tier_before_clear > 5 || rematch.max_tier_after_clear > 5 {
            return Err(ConfigError::Invalid("rematch tiers are capped at 5".to_string()));
        }
        Ok(())
    }
}
