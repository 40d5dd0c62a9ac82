/// Sample standard deviation (denominator `period - 1`) of each window,
/// measured around the matching moving average in `sma`.
///
/// `None` wherever the average is `None`. A period of 1 has no sample
/// deviation and yields `None` everywhere.
pub fn calculate_std_dev(values: &[f64], period: usize, sma: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if period < 2 || i + 1 < period {
                return None;
            }
            let mean = sma.get(i).copied().flatten()?;
            let squared = values[i + 1 - period..=i].iter().fold(0.0, |acc, &v| {
                let diff = v - mean;
                acc + diff * diff
            });
            let variance = squared / (period - 1) as f64;
            Some(variance.sqrt())
        })
        .collect()
}
