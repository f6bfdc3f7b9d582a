//! Min-max scaling

use super::error::{DataError, DataResult};

/// Scale a column to `[0, 1]` with `(x - min) / (max - min)`.
///
/// A constant column has no spread to scale by; every value maps to `0.0`.
/// Empty input is an error, as is any NaN or infinite value.
pub fn min_max_scale(values: &[f64]) -> DataResult<Vec<f64>> {
    if values.is_empty() {
        return Err(DataError::EmptyColumn);
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DataError::NonFiniteInput { index });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return Ok(vec![0.0; values.len()]);
    }

    Ok(values
        .iter()
        .map(|v| ((v - min) / range).clamp(0.0, 1.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_simple() {
        let scaled = min_max_scale(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_scale_unsorted_input_keeps_positions() {
        let values = [9.1, 7.4, 11.2, 8.0, 10.5];
        let scaled = min_max_scale(&values).unwrap();

        assert_eq!(scaled.len(), values.len());
        assert!(scaled.iter().all(|s| (0.0..=1.0).contains(s)));
        assert_eq!(scaled[1], 0.0); // min
        assert_eq!(scaled[2], 1.0); // max
    }

    #[test]
    fn test_scale_constant_column() {
        let scaled = min_max_scale(&[3.5, 3.5, 3.5]).unwrap();
        assert_eq!(scaled, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scale_single_value() {
        assert_eq!(min_max_scale(&[42.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_scale_empty() {
        assert!(matches!(min_max_scale(&[]), Err(DataError::EmptyColumn)));
    }

    #[test]
    fn test_scale_rejects_nan() {
        let result = min_max_scale(&[1.0, f64::NAN, 2.0]);
        assert!(matches!(result, Err(DataError::NonFiniteInput { index: 1 })));
    }
}
