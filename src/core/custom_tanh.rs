//! Table-interpolated approximation. No fitting happens at runtime: both tables are
//! constants, and the middle region needs only two lookups and a handful of
//! multiplies per element.

#[allow(unused)]
use crate::prelude::*;
use crate::core::select::{Overwrite, TanhApprox};

/// Saturation curve indexed by `ceil(|x|)`.
pub const Y_VALUES: [f64; 9] = [
    0.0, 0.956, 0.964, 0.995, 0.9993, 0.9999, 0.99998, 0.999998, 0.999999,
];

/// Reciprocal divisors for `x * (15 + x^2) * d`, one entry per 0.1 of `|x|`.
pub const DIVISOR_TABLE: [f64; 21] = [
    0.0, 0.0, 0.0651, 0.0643, 0.0628, 0.0606, 0.0582, 0.0557, 0.0530, 0.0503, 0.0476,
    0.0449, 0.0423, 0.0397, 0.0373, 0.0350, 0.0329, 0.0309, 0.0290, 0.0272, 0.256,
];

pub const CENTRAL_END: f64 = 0.29;
pub const HIGH_START: f64 = 1.9;

const MAX_DIVISOR_INDEX: usize = 19;

#[derive(Debug, Clone)]
pub struct CustomTanh {
    y_values: [f64; 9],
    divisor_table: [f64; 21],
}

impl Default for CustomTanh {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomTanh {
    pub fn new() -> Self {
        Self {
            y_values: Y_VALUES,
            divisor_table: DIVISOR_TABLE,
        }
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn divisor_table(&self) -> &[f64] {
        &self.divisor_table
    }

    /// Interpolates between `y[ceil(a) - 1]` and `y[ceil(a)]`. Magnitudes past the
    /// table saturate at its last entry.
    fn high(&self, a: f64) -> f64 {
        let last = self.y_values.len() - 1;
        let c = a.ceil();
        if c > last as f64 {
            return self.y_values[last];
        }
        let idx = (c as usize).max(1);
        let (lo, hi) = (self.y_values[idx - 1], self.y_values[idx]);
        hi - (c - a) * (hi - lo)
    }

    fn middle(&self, x: f64, a: f64) -> f64 {
        let scaled = a * 10.0;
        let floor = scaled.floor();
        let idx = (floor as usize).min(MAX_DIVISOR_INDEX);
        let (d0, d1) = (self.divisor_table[idx], self.divisor_table[idx + 1]);
        let divisor = d0 - (scaled - floor) * (d0 - d1);

        // x^2 kept to 4 decimals, ties to even
        let x2 = (x * x * 10000.0).round_ties_even() / 10000.0;
        x * (15.0 + x2) * divisor
    }
}

impl TanhApprox for CustomTanh {
    fn name(&self) -> &'static str {
        "CustomTanh"
    }

    fn apply(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        let a = x.abs();
        Overwrite::new(0.0)
            .when((-CENTRAL_END..=CENTRAL_END).contains(&x), || x)
            .when(a > HIGH_START, || {
                let v = self.high(a);
                if x < -HIGH_START {
                    -v
                } else {
                    v
                }
            })
            .when(a > CENTRAL_END && a <= HIGH_START, || self.middle(x, a))
            .value()
    }
}
