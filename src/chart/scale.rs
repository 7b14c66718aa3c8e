//! Scale factor selection.

use super::Bar;

/// Pick the largest factor in `{1, 1/2, 1/4, ...}` such that the highest count,
/// multiplied by it, does not exceed `desired_width`.
///
/// Power-of-two factors keep the ratio between any two bars intact (up to the
/// final rounding down to whole columns).
///
/// ### Termination
/// The factor halves on every step, so the scaled maximum drops below any
/// positive width after finitely many steps. For a non-positive width the
/// factor eventually underflows to `0.0`, which also ends the loop; callers
/// get `0.0` back in that case. A NaN or infinite width returns `1.0`.
///
/// ### Example
/// ```
/// use covid_stats::chart::{Bar, scale_factor};
///
/// let bars = vec![Bar::new("a", 100), Bar::new("b", 40)];
/// assert_eq!(scale_factor(&bars, 30.0), 0.25);
/// ```
pub fn scale_factor(bars: &[Bar], desired_width: f64) -> f64 {
    let highest = bars.iter().map(Bar::count).max().unwrap_or(0) as f64;

    let mut factor = 1.0_f64;
    while highest * factor > desired_width && factor > 0.0 {
        factor /= 2.0;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_width_terminates_at_zero() {
        let bars = vec![Bar::new("x", 10)];
        assert_eq!(scale_factor(&bars, -1.0), 0.0);
    }

    #[test]
    fn no_bars_keeps_unit_factor() {
        assert_eq!(scale_factor(&[], 10.0), 1.0);
    }

    #[test]
    fn nan_width_keeps_unit_factor() {
        let bars = vec![Bar::new("x", 10)];
        assert_eq!(scale_factor(&bars, f64::NAN), 1.0);
    }
}
