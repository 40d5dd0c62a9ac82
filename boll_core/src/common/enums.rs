use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Candle field the indicator is computed over
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Open,
    High,
    Low,
    #[default]
    Close,
}

/// Moving average kinds. Only the simple mean is supported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
pub enum MaType {
    #[default]
    #[strum(serialize = "SMA")]
    #[serde(rename = "SMA")]
    Sma,
}
