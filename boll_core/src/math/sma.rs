/// Simple moving average over `period` values.
///
/// Position `i` holds the mean of `values[i + 1 - period..=i]`, or `None` while
/// fewer than `period` values are available. Each window is summed
/// left to right and then divided, so results match a naive reference bit
/// for bit.
pub fn calculate_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                return None;
            }
            let sum = values[i + 1 - period..=i]
                .iter()
                .fold(0.0, |acc, &v| acc + v);
            Some(sum / period as f64)
        })
        .collect()
}
