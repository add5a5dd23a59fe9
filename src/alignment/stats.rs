/// Median of an ascending slice; the mean of the two middle values for even lengths.
pub(crate) fn median_sorted(sorted_values: &[f64]) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        Some((sorted_values[mid - 1] + sorted_values[mid]) / 2.0)
    } else {
        Some(sorted_values[mid])
    }
}

/// Quantile of an ascending slice with linear interpolation between closest ranks.
///
/// The interpolation never leaves `[lower, upper]`, so the result is always
/// <= the maximum and a `>=` filter keeps at least one value.
pub(crate) fn quantile_sorted(sorted_values: &[f64], quantile: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    if sorted_values.len() == 1 {
        return Some(sorted_values[0]);
    }

    let clamped = quantile.clamp(0.0, 1.0);
    let max_index = (sorted_values.len() - 1) as f64;
    let rank = clamped * max_index;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Some(sorted_values[lower]);
    }
    Some(lerp(sorted_values[lower], sorted_values[upper], rank - lower as f64))
}

fn lerp(a: f64, b: f64, weight: f64) -> f64 {
    let diff = b - a;
    if weight < 0.5 {
        a + diff * weight
    } else {
        b - diff * (1.0 - weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_and_even() {
        assert_eq!(median_sorted(&[]), None);
        assert_eq!(median_sorted(&[225.0]), Some(225.0));
        assert_eq!(median_sorted(&[1.0, 2.0, 9.0]), Some(2.0));
        assert_eq!(median_sorted(&[1.0, 2.0, 4.0, 9.0]), Some(3.0));
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        let values = [0.3, 0.5, 0.99];
        let q = quantile_sorted(&values, 0.99).expect("non-empty");
        // rank = 1.98 -> 0.5 + 0.98 * 0.49
        assert!((q - 0.9802).abs() < 1e-9);
        assert_eq!(quantile_sorted(&values, 1.0), Some(0.99));
        assert_eq!(quantile_sorted(&values, 0.0), Some(0.3));
        assert_eq!(quantile_sorted(&values, 0.5), Some(0.5));
    }

    #[test]
    fn quantile_of_equal_values_is_exact() {
        let values = [0.7, 0.7, 0.7, 0.7];
        assert_eq!(quantile_sorted(&values, 0.99), Some(0.7));
    }
}
