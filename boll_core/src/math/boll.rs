use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{offset::apply_offset, sma::calculate_sma, std_dev::calculate_std_dev};
use crate::candle::candle::Candle;
use crate::common::boll_error::BollError;
use crate::config::boll_config::BollConfig;

/// Band values aligned with the candle at the same position.
///
/// `timestamp` is always the candle's own timestamp; the offset only moves
/// the band values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub timestamp: i64,
    /// Middle band (moving average)
    pub basis: Option<f64>,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    /// Standard deviation the bands were derived from
    pub std_dev: Option<f64>,
}

impl BandPoint {
    pub fn is_defined(&self) -> bool {
        self.basis.is_some() && self.upper.is_some() && self.lower.is_some()
    }

    /// Distance between the upper and lower band
    pub fn width(&self) -> Option<f64> {
        Some(self.upper? - self.lower?)
    }
}

/// Compute Bollinger Bands for `candles`.
///
/// Returns one point per candle. Missing history shows up as `None` fields,
/// never as an error; the only error is an invalid `config`.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    config: &BollConfig,
) -> Result<Vec<BandPoint>, BollError> {
    config.validate()?;
    if candles.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        candles = candles.len(),
        length = config.length,
        multiplier = config.std_dev_multiplier,
        offset = config.offset,
        source = %config.source,
        "calculating bollinger bands"
    );

    let source: Vec<f64> = candles.iter().map(|c| c.price(config.source)).collect();

    let basis = calculate_sma(&source, config.length);
    let std_dev = calculate_std_dev(&source, config.length, &basis);

    let k = config.std_dev_multiplier;
    let (upper, lower): (Vec<Option<f64>>, Vec<Option<f64>>) = basis
        .iter()
        .zip(&std_dev)
        .map(|(&mid, &sd)| match (mid, sd) {
            (Some(mid), Some(sd)) => (Some(mid + k * sd), Some(mid - k * sd)),
            _ => (None, None),
        })
        .unzip();

    let basis = apply_offset(&basis, config.offset);
    let upper = apply_offset(&upper, config.offset);
    let lower = apply_offset(&lower, config.offset);
    let std_dev = apply_offset(&std_dev, config.offset);

    let points: Vec<BandPoint> = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| BandPoint {
            timestamp: candle.timestamp,
            basis: basis[i],
            upper: upper[i],
            lower: lower[i],
            std_dev: std_dev[i],
        })
        .collect();

    trace!(
        defined = points.iter().filter(|p| p.is_defined()).count(),
        "bollinger bands done"
    );
    Ok(points)
}

/// Find the band point recorded at `timestamp`
pub fn bands_at_timestamp(points: &[BandPoint], timestamp: i64) -> Option<&BandPoint> {
    points.iter().find(|p| p.timestamp == timestamp)
}
