use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config_with_check::ConfigWithCheck;
use crate::common::{
    boll_error::{BollError, ErrCode},
    enums::{MaType, PriceSource},
};

pub const DEFAULT_LENGTH: usize = 20;
pub const DEFAULT_STD_DEV_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_OFFSET: i64 = 0;

/// Bollinger Bands parameters.
///
/// Treated as an immutable value: the `with_*` methods hand back a new config
/// instead of editing this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollConfig {
    /// Window length of the moving average
    pub length: usize,
    /// Number of standard deviations between the basis and each band
    pub std_dev_multiplier: f64,
    /// Bars to shift the computed bands; negative shifts toward the past
    pub offset: i64,
    pub source: PriceSource,
    pub ma_type: MaType,
}

impl Default for BollConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            std_dev_multiplier: DEFAULT_STD_DEV_MULTIPLIER,
            offset: DEFAULT_OFFSET,
            source: PriceSource::default(),
            ma_type: MaType::default(),
        }
    }
}

impl BollConfig {
    /// Build a config from a JSON-style map, falling back to defaults for
    /// missing keys. Unknown keys are rejected.
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, BollError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());

        let source = match conf.get::<String>("source")? {
            Some(s) => parse_enum::<PriceSource>("source", &s)?,
            None => PriceSource::default(),
        };
        let ma_type = match conf.get::<String>("ma_type")? {
            Some(s) => parse_enum::<MaType>("ma_type", &s)?,
            None => MaType::default(),
        };

        let config = Self {
            length: conf.get("length")?.unwrap_or(DEFAULT_LENGTH),
            std_dev_multiplier: conf
                .get("std_dev_multiplier")?
                .unwrap_or(DEFAULT_STD_DEV_MULTIPLIER),
            offset: conf.get("offset")?.unwrap_or(DEFAULT_OFFSET),
            source,
            ma_type,
        };

        conf.check()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object such as `{"length": 20, "source": "close"}`
    pub fn from_json_str(json: &str) -> Result<Self, BollError> {
        let map: HashMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| BollError::new(format!("invalid config json: {}", e), ErrCode::ConfigError))?;
        Self::new(Some(map))
    }

    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    pub fn with_std_dev_multiplier(self, std_dev_multiplier: f64) -> Self {
        Self {
            std_dev_multiplier,
            ..self
        }
    }

    pub fn with_offset(self, offset: i64) -> Self {
        Self { offset, ..self }
    }

    pub fn with_source(self, source: PriceSource) -> Self {
        Self { source, ..self }
    }

    pub fn with_ma_type(self, ma_type: MaType) -> Self {
        Self { ma_type, ..self }
    }

    /// Reject a zero window length or a multiplier that is not a finite
    /// positive number.
    pub fn validate(&self) -> Result<(), BollError> {
        if self.length == 0 {
            debug!("rejecting config with zero length");
            return Err(BollError::new(
                "length must be a positive integer",
                ErrCode::ParaError,
            ));
        }
        if !(self.std_dev_multiplier.is_finite() && self.std_dev_multiplier > 0.0) {
            debug!(multiplier = self.std_dev_multiplier, "rejecting config multiplier");
            return Err(BollError::new(
                format!(
                    "std_dev_multiplier must be positive, got {}",
                    self.std_dev_multiplier
                ),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }
}

fn parse_enum<T: FromStr>(key: &str, value: &str) -> Result<T, BollError> {
    T::from_str(value).map_err(|_| {
        BollError::new(format!("unknown {}={}", key, value), ErrCode::ParaError)
    })
}
