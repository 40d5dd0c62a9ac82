//! Property tests for the band calculator

use boll_core::{calculate_bollinger_bands, BandPoint, BollConfig, Candle};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn candles_from(raw: &[u16]) -> Vec<Candle> {
    raw.iter()
        .enumerate()
        .map(|(i, &r)| {
            let p = f64::from(r) / 10.0 + 1.0;
            Candle::new(i as i64 * 60_000, p, p * 1.01, p * 0.99, p, 0.0)
        })
        .collect()
}

fn window_len(raw: u8) -> usize {
    usize::from(raw % 30) + 2
}

fn run(candles: &[Candle], config: &BollConfig) -> Vec<BandPoint> {
    calculate_bollinger_bands(candles, config).expect("valid config")
}

#[quickcheck]
fn output_aligned_with_input(raw: Vec<u16>, len: u8, offset: i8) -> bool {
    let candles = candles_from(&raw);
    let config = BollConfig::default()
        .with_length(window_len(len))
        .with_offset(i64::from(offset));
    let points = run(&candles, &config);
    points.len() == candles.len()
        && points
            .iter()
            .zip(&candles)
            .all(|(p, c)| p.timestamp == c.timestamp)
}

#[quickcheck]
fn warmup_positions_undefined(raw: Vec<u16>, len: u8) -> bool {
    let candles = candles_from(&raw);
    let length = window_len(len);
    let points = run(&candles, &BollConfig::default().with_length(length));
    points.iter().enumerate().all(|(i, p)| {
        let warm = i + 1 < length;
        warm == p.basis.is_none()
            && warm == p.upper.is_none()
            && warm == p.lower.is_none()
            && warm == p.std_dev.is_none()
    })
}

#[quickcheck]
fn basis_and_std_dev_match_window(raw: Vec<u16>, len: u8) -> bool {
    let candles = candles_from(&raw);
    let length = window_len(len);
    let points = run(&candles, &BollConfig::default().with_length(length));

    points.iter().enumerate().skip(length - 1).all(|(i, p)| {
        let window: Vec<f64> = candles[i + 1 - length..=i].iter().map(|c| c.close).collect();
        let mean = window.iter().fold(0.0, |acc, &v| acc + v) / length as f64;
        let var = window
            .iter()
            .fold(0.0, |acc, &v| acc + (v - mean) * (v - mean))
            / (length - 1) as f64;
        p.basis == Some(mean) && p.std_dev == Some(var.sqrt())
    })
}

#[quickcheck]
fn bands_symmetric_around_basis(raw: Vec<u16>, len: u8, mult: u8) -> bool {
    let candles = candles_from(&raw);
    let k = f64::from(mult % 40 + 1) / 10.0;
    let config = BollConfig::default()
        .with_length(window_len(len))
        .with_std_dev_multiplier(k);
    run(&candles, &config).iter().all(|p| match (p.basis, p.upper, p.lower, p.std_dev) {
        (Some(b), Some(u), Some(l), Some(sd)) => {
            let tol = 1e-9 * (1.0 + b.abs());
            ((u - b) - k * sd).abs() < tol && ((b - l) - k * sd).abs() < tol
        }
        (None, None, None, None) => true,
        _ => false,
    })
}

#[quickcheck]
fn offset_only_moves_values(raw: Vec<u16>, len: u8, offset: i8) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let candles = candles_from(&raw);
    let base = BollConfig::default().with_length(window_len(len));
    let o = i64::from(offset);
    let plain = run(&candles, &base);
    let shifted = run(&candles, &base.with_offset(o));

    let n = candles.len() as i64;
    let ok = (0..n).all(|i| {
        let src = i - o;
        let got = &shifted[i as usize];
        if (0..n).contains(&src) {
            let want = &plain[src as usize];
            got.basis == want.basis
                && got.upper == want.upper
                && got.lower == want.lower
                && got.std_dev == want.std_dev
        } else {
            !got.is_defined() && got.std_dev.is_none()
        }
    });
    TestResult::from_bool(ok)
}

#[quickcheck]
fn deterministic(raw: Vec<u16>, len: u8) -> bool {
    let candles = candles_from(&raw);
    let config = BollConfig::default().with_length(window_len(len));
    run(&candles, &config) == run(&candles, &config)
}
