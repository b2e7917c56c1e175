//! Hybrid region approximation (HLPA): identity near zero, a degree-5 fit blended
//! into exact tanh on `[-2, 2]`, and a fixed `1 - epsilon` saturation outside.

#[allow(unused)]
use crate::prelude::*;
use crate::core::polyfit::{fit_tanh, Polynomial};
use crate::core::select::TanhApprox;

/// What the blended region mixes the polynomial with as `|x|` approaches 2.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendFallback {
    /// Exact `tanh`, reproducing the reference error curve.
    #[default]
    Exact,
    /// The fitted polynomial alone, leaving no transcendental call on the hot path.
    Polynomial,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HlpaConfig {
    pub pass_region_end: f64,
    pub sat_region_start: f64,
    pub epsilon: f64,
    pub fit_samples: usize,
    pub degree: usize,
    pub blend: BlendFallback,
}

impl Default for HlpaConfig {
    fn default() -> Self {
        Self {
            pass_region_end: 0.15,
            sat_region_start: 2.0,
            epsilon: 0.02,
            fit_samples: 500,
            degree: 5,
            blend: BlendFallback::Exact,
        }
    }
}

impl HlpaConfig {
    pub fn new(epsilon: Option<f64>, blend: Option<BlendFallback>) -> Self {
        let default = Self::default();
        Self {
            epsilon: epsilon.unwrap_or(default.epsilon),
            blend: blend.unwrap_or(default.blend),
            ..default
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon < 1.0) {
            return Err(ApproxError::InvalidConfiguration(format!(
                "epsilon must lie in (0, 1), got {}",
                self.epsilon
            )));
        }
        if !(self.pass_region_end >= 0.0 && self.pass_region_end < self.sat_region_start) {
            return Err(ApproxError::InvalidConfiguration(format!(
                "expected 0 <= pass_region_end < sat_region_start, got {} and {}",
                self.pass_region_end, self.sat_region_start
            )));
        }
        if !self.sat_region_start.is_finite() {
            return Err(ApproxError::InvalidConfiguration(
                "sat_region_start must be finite".to_string(),
            ));
        }
        if self.fit_samples <= self.degree {
            return Err(ApproxError::InvalidConfiguration(format!(
                "{} samples cannot fit a degree {} polynomial",
                self.fit_samples, self.degree
            )));
        }
        Ok(())
    }
}

/// Region of the input, tested in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Pass,
    Blended,
    Polynomial,
    Saturated,
}

// bounds of the blended region, independent of the configured radii
const BLEND_LIMIT: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct Hlpa {
    poly: Polynomial,
    pass_region_end: f64,
    sat_region_start: f64,
    epsilon: f64,
    blend: BlendFallback,
}

impl Hlpa {
    pub fn new() -> Result<Self> {
        Self::with_config(&HlpaConfig::default())
    }

    #[tracing::instrument(level = "debug", skip(config), fields(epsilon = config.epsilon))]
    pub fn with_config(config: &HlpaConfig) -> Result<Self> {
        config.validate()?;
        let poly = fit_tanh(-BLEND_LIMIT, BLEND_LIMIT, config.fit_samples, config.degree)?;
        Ok(Self {
            poly,
            pass_region_end: config.pass_region_end,
            sat_region_start: config.sat_region_start,
            epsilon: config.epsilon,
            blend: config.blend,
        })
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn region(&self, x: f64) -> Region {
        let a = x.abs();
        if a <= self.pass_region_end {
            Region::Pass
        } else if (-BLEND_LIMIT..=BLEND_LIMIT).contains(&x) {
            Region::Blended
        } else if a <= self.sat_region_start {
            Region::Polynomial
        } else {
            Region::Saturated
        }
    }

    fn blended(&self, x: f64) -> f64 {
        let poly = self.poly.eval(x);
        let w = (1.0 - x.abs() / BLEND_LIMIT).clamp(0.0, 1.0);
        let fallback = match self.blend {
            BlendFallback::Exact => x.tanh(),
            BlendFallback::Polynomial => poly,
        };
        w * poly + (1.0 - w) * fallback
    }
}

impl TanhApprox for Hlpa {
    fn name(&self) -> &'static str {
        "HLPA"
    }

    fn apply(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        match self.region(x) {
            Region::Pass => x,
            Region::Blended => self.blended(x),
            Region::Polynomial => self.poly.eval(x),
            Region::Saturated => x.signum() * (1.0 - self.epsilon),
        }
    }
}
