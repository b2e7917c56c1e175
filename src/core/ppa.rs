//! Segmented cubic approximation (PPA).
//!
//! The domain `[-6, 6]` is split at fixed breakpoints and each half-open segment
//! `[start, end)` gets its own least-squares cubic. Inputs are clamped to the outer
//! breakpoints, whose exact tanh values serve as saturation constants.

#[allow(unused)]
use crate::prelude::*;
use crate::core::polyfit::{fit_tanh, Polynomial};
use crate::core::select::{Overwrite, TanhApprox};

pub const DEFAULT_BREAKPOINTS: [f64; 9] = [-6.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 6.0];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PpaConfig {
    pub breakpoints: Vec<f64>,
    pub samples_per_segment: usize,
    pub degree: usize,
}

impl Default for PpaConfig {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            samples_per_segment: 200,
            degree: 3,
        }
    }
}

impl PpaConfig {
    pub fn new(breakpoints: Option<Vec<f64>>, samples_per_segment: Option<usize>) -> Self {
        let default = Self::default();
        Self {
            breakpoints: breakpoints.unwrap_or(default.breakpoints),
            samples_per_segment: samples_per_segment.unwrap_or(default.samples_per_segment),
            degree: default.degree,
        }
    }

    fn validate(&self) -> Result<()> {
        let b = &self.breakpoints;
        if b.len() < 2 {
            return Err(ApproxError::InvalidBreakpoints(format!(
                "need at least 2 breakpoints, got {}",
                b.len()
            )));
        }
        if b.iter().any(|v| !v.is_finite()) {
            return Err(ApproxError::InvalidBreakpoints(
                "breakpoints must be finite".to_string(),
            ));
        }
        if b.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ApproxError::InvalidBreakpoints(
                "breakpoints must be strictly increasing".to_string(),
            ));
        }
        // odd symmetry of the fit relies on mirrored segments
        if b.iter().zip(b.iter().rev()).any(|(lo, hi)| *lo != -*hi) {
            return Err(ApproxError::InvalidBreakpoints(
                "breakpoints must be symmetric about zero".to_string(),
            ));
        }
        if self.samples_per_segment <= self.degree {
            return Err(ApproxError::InvalidConfiguration(format!(
                "{} samples per segment cannot fit a degree {} polynomial",
                self.samples_per_segment, self.degree
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Ppa {
    breakpoints: Vec<f64>,
    segments: Vec<Polynomial>,
    lower: f64,
    upper: f64,
}

impl Ppa {
    pub fn new() -> Result<Self> {
        Self::with_config(&PpaConfig::default())
    }

    #[tracing::instrument(level = "debug", skip(config), fields(segments = config.breakpoints.len().saturating_sub(1)))]
    pub fn with_config(config: &PpaConfig) -> Result<Self> {
        config.validate()?;

        let segments = config
            .breakpoints
            .windows(2)
            .map(|w| fit_tanh(w[0], w[1], config.samples_per_segment, config.degree))
            .collect::<Result<Vec<_>>>()?;

        let lower = config.breakpoints[0];
        let upper = config.breakpoints[config.breakpoints.len() - 1];

        Ok(Self {
            breakpoints: config.breakpoints.clone(),
            segments,
            lower: lower.tanh(),
            upper: upper.tanh(),
        })
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn segments(&self) -> &[Polynomial] {
        &self.segments
    }

    /// `(tanh(first breakpoint), tanh(last breakpoint))`.
    pub fn saturation(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl TanhApprox for Ppa {
    fn name(&self) -> &'static str {
        "PPA"
    }

    fn apply(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];
        let x = x.clamp(first, last);

        let fitted = self
            .breakpoints
            .windows(2)
            .zip(self.segments.iter())
            .fold(Overwrite::new(0.0), |out, (w, poly)| {
                out.when(x >= w[0] && x < w[1], || poly.eval(x))
            });

        let out = fitted
            .when(x >= last, || self.upper)
            .when(x <= first, || self.lower)
            .value();

        // the outer cubics overshoot the saturation constants between breakpoints
        out.clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count() {
        let ppa = Ppa::new().unwrap();
        assert_eq!(ppa.segments().len(), DEFAULT_BREAKPOINTS.len() - 1);
        assert!(ppa.segments().iter().all(|p| p.degree() == 3));
    }

    #[test]
    fn test_zero() {
        let ppa = Ppa::new().unwrap();
        // constant term of the [0, 0.5) cubic
        assert!(ppa.apply(0.0).abs() < 1e-3);
    }

    #[test]
    fn test_saturation_constants() {
        let ppa = Ppa::new().unwrap();
        assert_eq!(ppa.apply(6.0), 6.0f64.tanh());
        assert_eq!(ppa.apply(-6.0), (-6.0f64).tanh());
        assert_eq!(ppa.apply(8.0), ppa.apply(6.0));
        assert_eq!(ppa.apply(-100.0), (-6.0f64).tanh());
        assert_eq!(ppa.apply(f64::INFINITY), 6.0f64.tanh());
        assert_eq!(ppa.apply(f64::NEG_INFINITY), (-6.0f64).tanh());
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let ppa = Ppa::new().unwrap();
        let (lower, upper) = ppa.saturation();
        // the [2, 6) cubic peaks above tanh(6) around x = 4
        assert!(ppa.segments()[7].eval(4.0) > upper);
        assert!(ppa.segments()[0].eval(-4.0) < lower);
        assert_eq!(ppa.apply(4.0), 6.0f64.tanh());
        assert_eq!(ppa.apply(-4.0), (-6.0f64).tanh());
        assert_eq!(ppa.apply(5.9999), upper);
    }

    #[test]
    fn test_nan_propagates() {
        let ppa = Ppa::new().unwrap();
        assert!(ppa.apply(f64::NAN).is_nan());
    }

    #[test]
    fn test_boundary_uses_right_segment() {
        let ppa = Ppa::new().unwrap();
        // 0.5 belongs to [0.5, 1), not [0, 0.5)
        assert_eq!(ppa.apply(0.5), ppa.segments()[5].eval(0.5));
        assert_eq!(ppa.apply(-0.5), ppa.segments()[3].eval(-0.5));
    }

    #[test]
    fn test_range() {
        let ppa = Ppa::new().unwrap();
        let (lower, upper) = ppa.saturation();
        for i in 0..=16000 {
            let x = -8.0 + i as f64 * 0.001;
            let y = ppa.apply(x);
            assert!(y >= lower && y <= upper, "x={} y={}", x, y);
        }
    }

    #[test]
    fn test_error_bound() {
        let ppa = Ppa::new().unwrap();
        for i in 0..=16000 {
            let x = -8.0 + i as f64 * 0.001;
            assert!((ppa.apply(x) - x.tanh()).abs() < 0.02, "x={}", x);
        }
    }

    #[test]
    fn test_odd_away_from_breakpoints() {
        let ppa = Ppa::new().unwrap();
        for i in 1..8000 {
            let x = i as f64 * 0.001 + 0.0003;
            assert!((ppa.apply(-x) + ppa.apply(x)).abs() < 1e-9, "x={}", x);
        }
    }

    #[test]
    fn test_rejects_bad_breakpoints() {
        let unsorted = PpaConfig::new(Some(vec![-1.0, 1.0, 0.0]), None);
        assert!(matches!(
            Ppa::with_config(&unsorted),
            Err(ApproxError::InvalidBreakpoints(_))
        ));

        let asymmetric = PpaConfig::new(Some(vec![-6.0, 0.0, 5.0]), None);
        assert!(matches!(
            Ppa::with_config(&asymmetric),
            Err(ApproxError::InvalidBreakpoints(_))
        ));

        let single = PpaConfig::new(Some(vec![0.0]), None);
        assert!(Ppa::with_config(&single).is_err());
    }

    #[test]
    fn test_rejects_too_few_samples() {
        let config = PpaConfig::new(None, Some(3));
        assert!(matches!(
            Ppa::with_config(&config),
            Err(ApproxError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_custom_breakpoints() {
        let config = PpaConfig::new(Some(vec![-4.0, -1.0, 0.0, 1.0, 4.0]), Some(100));
        let ppa = Ppa::with_config(&config).unwrap();
        assert_eq!(ppa.segments().len(), 4);
        assert_eq!(ppa.apply(5.0), 4.0f64.tanh());
    }
}
