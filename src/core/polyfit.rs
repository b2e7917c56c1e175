#[allow(unused)]
use crate::prelude::*;
use nalgebra::{DMatrix, DVector};

/// Dense polynomial, coefficients ordered highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Horner evaluation.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Least-squares polynomial fit of `y` over `x`.
///
/// The Vandermonde columns are normalized before the SVD solve and singular values
/// below `len(x) * EPSILON` (relative to the largest) are treated as zero. A rank
/// deficient system is reported instead of returning a partial fit.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial> {
    let order = degree + 1;
    if x.len() != y.len() {
        return Err(ApproxError::FitError(format!(
            "sample count mismatch: {} x values, {} y values",
            x.len(),
            y.len()
        )));
    }
    if x.len() < order {
        return Err(ApproxError::FitError(format!(
            "{} samples cannot determine a degree {} polynomial",
            x.len(),
            degree
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(ApproxError::FitError("non-finite sample".to_string()));
    }

    let n = x.len();
    let mut lhs = DMatrix::<f64>::from_fn(n, order, |r, c| x[r].powi((degree - c) as i32));
    let scale: Vec<f64> = lhs.column_iter().map(|col| col.norm()).collect();
    for (mut col, &s) in lhs.column_iter_mut().zip(scale.iter()) {
        if s > 0.0 {
            col /= s;
        }
    }
    let rhs = DVector::from_column_slice(y);

    let svd = lhs.svd(true, true);
    let eps = n as f64 * f64::EPSILON * svd.singular_values.max();
    let rank = svd.rank(eps);
    if rank < order {
        return Err(ApproxError::FitError(format!(
            "rank deficient system: rank {} < {}",
            rank, order
        )));
    }
    let solution = svd
        .solve(&rhs, eps)
        .map_err(|e| ApproxError::FitError(e.to_string()))?;

    let coeffs: Vec<f64> = solution
        .iter()
        .zip(scale.iter())
        .map(|(c, s)| c / s)
        .collect();
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(ApproxError::FitError("non-finite coefficient".to_string()));
    }
    Ok(Polynomial::new(coeffs))
}

/// Fits `degree` to `samples` evenly spaced exact tanh values on `[start, end]`.
#[tracing::instrument(level = "debug")]
pub fn fit_tanh(start: f64, end: f64, samples: usize, degree: usize) -> Result<Polynomial> {
    let x = Array1::linspace(start, end, samples);
    let y = x.mapv(f64::tanh);
    let poly = polyfit(&x.to_vec(), &y.to_vec(), degree)?;

    let residual = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (poly.eval(xi) - yi).abs())
        .fold(0.0, f64::max);
    tracing::debug!(residual, coefficients = ?poly.coefficients(), "fitted tanh segment");

    Ok(poly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_horner() {
        // 2x^3 - x + 4
        let p = Polynomial::new(vec![2.0, 0.0, -1.0, 4.0]);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.eval(0.0), 4.0);
        assert_eq!(p.eval(2.0), 18.0);
        assert_eq!(p.eval(-1.0), 3.0);
    }

    #[test]
    fn test_recovers_exact_cubic() {
        let x: Vec<f64> = (0..50).map(|i| -3.0 + i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|&v| 0.5 * v.powi(3) - 2.0 * v + 1.0).collect();
        let p = polyfit(&x, &y, 3).unwrap();
        let expected = [0.5, 0.0, -2.0, 1.0];
        for (c, e) in p.coefficients().iter().zip(expected.iter()) {
            assert!((c - e).abs() < 1e-9, "coefficient {} != {}", c, e);
        }
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = polyfit(&[0.0, 1.0, 2.0], &[0.0, 1.0], 1);
        assert!(matches!(result, Err(ApproxError::FitError(_))));
    }

    #[test]
    fn test_rejects_too_few_samples() {
        let result = polyfit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], 3);
        assert!(matches!(result, Err(ApproxError::FitError(_))));
    }

    #[test]
    fn test_rejects_degenerate_samples() {
        // every sample at the same abscissa
        let x = vec![1.5; 20];
        let y = vec![0.9; 20];
        let result = polyfit(&x, &y, 3);
        assert!(matches!(result, Err(ApproxError::FitError(_))));
    }

    #[test]
    fn test_rejects_nan_samples() {
        let result = polyfit(&[0.0, 1.0, f64::NAN], &[0.0, 1.0, 2.0], 1);
        assert!(matches!(result, Err(ApproxError::FitError(_))));
    }

    #[test]
    fn test_fit_tanh_segment() {
        let p = fit_tanh(0.0, 0.5, 200, 3).unwrap();
        for i in 0..=50 {
            let x = i as f64 * 0.01;
            assert!((p.eval(x) - x.tanh()).abs() < 1e-3);
        }
    }
}
