//! Error sweep of approximations against exact tanh over an evenly sampled interval.

use crate::prelude::*;
use crate::core::select::apply_array;
use rayon::prelude::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
    /// Samples with an absolute error above this are reported as seams.
    pub error_bound: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: -8.0,
            end: 8.0,
            samples: 1000,
            error_bound: 0.02,
        }
    }
}

impl SweepConfig {
    pub fn new(range: Option<(f64, f64)>, samples: Option<usize>, error_bound: Option<f64>) -> Self {
        let default = Self::default();
        let (start, end) = range.unwrap_or((default.start, default.end));
        Self {
            start,
            end,
            samples: samples.unwrap_or(default.samples),
            error_bound: error_bound.unwrap_or(default.error_bound),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.start < self.end) {
            return Err(ApproxError::InvalidConfiguration(format!(
                "sweep range [{}, {}] is empty or not finite",
                self.start, self.end
            )));
        }
        if self.samples < 2 {
            return Err(ApproxError::InvalidConfiguration(
                "a sweep needs at least 2 samples".to_string(),
            ));
        }
        if !(self.error_bound >= 0.0) {
            return Err(ApproxError::InvalidConfiguration(format!(
                "error bound must be non-negative, got {}",
                self.error_bound
            )));
        }
        Ok(())
    }

    pub fn points(&self) -> Result<Array1<f64>> {
        self.validate()?;
        Ok(Array1::linspace(self.start, self.end, self.samples))
    }
}

#[derive(Debug, Clone)]
pub struct SweepReport {
    pub name: String,
    pub x: Array1<f64>,
    pub output: Array1<f64>,
    pub abs_error: Array1<f64>,
    pub max_abs_error: f64,
    /// Sample point where `max_abs_error` occurs (first one on ties).
    pub argmax: f64,
    pub mean_abs_error: f64,
    pub mse: f64,
    pub error_bound: f64,
    /// Sample points whose error exceeds `error_bound`.
    pub seams: Vec<f64>,
}

impl SweepReport {
    pub fn within_bound(&self) -> bool {
        self.seams.is_empty()
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(method = approx.name()))]
pub fn sweep<A: TanhApprox + ?Sized>(approx: &A, config: &SweepConfig) -> Result<SweepReport> {
    let x = config.points()?;
    let output = apply_array(approx, &x);
    let abs_error = (&output - &x.mapv(f64::tanh)).mapv(f64::abs);

    let (argmax, max_abs_error) = x
        .iter()
        .zip(abs_error.iter())
        .fold((x[0], f64::NEG_INFINITY), |(best_x, best), (&xi, &e)| {
            if e > best {
                (xi, e)
            } else {
                (best_x, best)
            }
        });
    let mean_abs_error = abs_error.mean().unwrap_or(0.0);
    let mse = abs_error.mapv(|e| e * e).mean().unwrap_or(0.0);

    let seams: Vec<f64> = x
        .iter()
        .zip(abs_error.iter())
        .filter(|(_, e)| **e > config.error_bound)
        .map(|(&xi, _)| xi)
        .collect();
    if !seams.is_empty() {
        tracing::warn!(
            method = approx.name(),
            count = seams.len(),
            first = seams[0],
            bound = config.error_bound,
            "error bound exceeded"
        );
    }
    tracing::debug!(max_abs_error, argmax, mean_abs_error, mse, "sweep done");

    Ok(SweepReport {
        name: approx.name().to_string(),
        x,
        output,
        abs_error,
        max_abs_error,
        argmax,
        mean_abs_error,
        mse,
        error_bound: config.error_bound,
        seams,
    })
}

/// Sweeps every activation in parallel; reports keep the input order.
pub fn compare(activations: &[Activation], config: &SweepConfig) -> Result<Vec<SweepReport>> {
    activations
        .par_iter()
        .map(|activation| sweep(activation, config))
        .collect()
}

/// Plain-text table, one line per report.
pub fn summary(reports: &[SweepReport]) -> String {
    let mut res = "\nApproximation error vs exact tanh\n".to_string();
    res.push_str("-------------------------------------------------------------------------\n");
    res.push_str("Method\t\t Max |err|\t at x\t\t Mean |err|\t MSE\t\t Seams\n");
    for r in reports {
        res.push_str(&format!(
            "{:<12}\t {:.6}\t {:>8.4}\t {:.6}\t {:.3e}\t {}\n",
            r.name,
            r.max_abs_error,
            r.argmax,
            r.mean_abs_error,
            r.mse,
            r.seams.len()
        ));
    }
    res.push_str("-------------------------------------------------------------------------\n");
    res
}
