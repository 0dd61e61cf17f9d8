//! Cumulative trapezoidal integration.

/// Running integral of sampled `y` over axis `x`, trapezoidal rule, initial
/// value 0.
///
/// The output has the same length as the input: `out[0] = 0` and
/// `out[i] = out[i-1] + (x[i] - x[i-1]) / 2 * (y[i-1] + y[i])`. Degenerate
/// inputs stay well-defined: a single sample integrates to `[0.0]` and an
/// empty input to an empty vector.
pub fn cumulative_trapezoid(y: &[f64], x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(y.len(), x.len());

    let mut out = Vec::with_capacity(y.len());
    if y.is_empty() {
        return out;
    }
    out.push(0.0);

    let mut acc = 0.0;
    for i in 1..y.len() {
        acc += (x[i] - x[i - 1]) / 2.0 * (y[i - 1] + y[i]);
        out.push(acc);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_integrates_to_line() {
        let x: Vec<f64> = (0..5).map(|k| k as f64).collect();
        let y = vec![2.0; 5];
        let out = cumulative_trapezoid(&y, &x);
        assert_eq!(out, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_line_integrates_to_parabola_exactly() {
        // Trapezoid rule is exact for polynomials up to degree 1
        let x: Vec<f64> = (0..11).map(|k| k as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|&t| 3.0 * t).collect();
        let out = cumulative_trapezoid(&y, &x);
        for (i, &t) in x.iter().enumerate() {
            assert_relative_eq!(out[i], 1.5 * t * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uneven_spacing() {
        let x = [0.0, 1.0, 3.0];
        let y = [1.0, 1.0, 1.0];
        let out = cumulative_trapezoid(&y, &x);
        assert_eq!(out, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_single_sample_is_zero() {
        let out = cumulative_trapezoid(&[7.0], &[0.0]);
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_empty_input() {
        let out = cumulative_trapezoid(&[], &[]);
        assert!(out.is_empty());
    }
}
