pub mod candle;
pub mod common;
pub mod config;
pub mod math;

pub use candle::candle::Candle;
pub use candle::sample_data::generate_sample_data;
pub use common::boll_error::{BollError, ErrCode};
pub use common::enums::{MaType, PriceSource};
pub use common::utils::{format_band_value, DEFAULT_DECIMALS};
pub use config::boll_config::BollConfig;
pub use math::boll::{bands_at_timestamp, calculate_bollinger_bands, BandPoint};
