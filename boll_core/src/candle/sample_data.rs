use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::candle::Candle;
use crate::common::time::MILLIS_PER_DAY;

const START_PRICE: f64 = 100.0;
const MIN_PRICE: f64 = 1.0;
const VOLUME_BASE: f64 = 1_000_000.0;

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate `count` daily candles starting at `base_time` (ms).
///
/// The walk follows a slow sine trend plus uniform noise. The same seed always
/// yields the same series.
pub fn generate_sample_data(count: usize, base_time: i64, seed: u64) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(count);
    let mut current_price = START_PRICE;

    for i in 0..count {
        let timestamp = base_time + i as i64 * MILLIS_PER_DAY;

        let trend = (i as f64 / 20.0).sin() * 0.5;
        let volatility = (rng.random::<f64>() - 0.5) * 4.0;
        let price_change = trend + volatility;

        current_price = (current_price + price_change).max(MIN_PRICE);

        let open = current_price;
        let range = open * (rng.random::<f64>() * 0.1 + 0.02);
        let high = open + rng.random::<f64>() * range;
        let low = open - rng.random::<f64>() * range;

        let close_direction = rng.random::<f64>() - 0.5;
        let close = open + close_direction * range * 0.7;
        current_price = close;

        let actual_high = open.max(high).max(low).max(close);
        let actual_low = open.min(high).min(low).min(close);

        let volume = (VOLUME_BASE
            + price_change.abs() * 500_000.0
            + rng.random::<f64>() * 2_000_000.0)
            .floor();

        data.push(Candle::new(
            timestamp,
            round_cents(open),
            round_cents(actual_high),
            round_cents(actual_low),
            round_cents(close),
            volume,
        ));
    }

    debug!(count, seed, "generated sample candles");
    data
}
