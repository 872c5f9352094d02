/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to one decimal place, the precision the report output uses for
/// temperatures and UV readings.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
