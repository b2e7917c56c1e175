use crate::prelude::*;
use crate::core::select::apply_array;
use crate::rand_array;
use crate::utils::seeded_rng;

/// Inference-only LSTM cell with a pluggable cell activation.
///
/// Gates are laid out `[input, forget, candidate, output]` along the second axis of
/// `w`, `u` and `b`. The gates use an exact sigmoid; `activation` replaces tanh for
/// both the candidate and the cell output.
#[derive(Debug, Clone)]
pub struct LstmCell {
    pub w: Array2<f64>,
    pub u: Array2<f64>,
    pub b: Array2<f64>,
    pub activation: Activation,
}

#[derive(Debug, Clone)]
pub struct LstmState {
    /// Hidden state after every step, `(batch, steps, units)`.
    pub outputs: Array3<f64>,
    pub hidden: Array2<f64>,
    pub cell: Array2<f64>,
}

/// Mean squared distance between the states of an approximated cell and the same
/// cell running exact tanh.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StateDrift {
    pub hidden_mse: f64,
    pub cell_mse: f64,
}

impl StateDrift {
    pub fn mean(&self) -> f64 {
        (self.hidden_mse + self.cell_mse) / 2.0
    }
}

impl LstmCell {
    pub fn new(features: usize, units: usize, activation: Activation, seed: u64) -> Result<Self> {
        if features == 0 || units == 0 {
            return Err(ApproxError::InvalidConfiguration(
                "LSTM dimensions must be greater than 0".to_string(),
            ));
        }
        let mut rng = seeded_rng(seed);
        let bound = 1.0 / (units as f64).sqrt();

        let mut b = Array2::zeros((1, 4 * units));
        // forget gate starts open
        b.slice_mut(s![.., units..2 * units]).fill(1.0);

        Ok(Self {
            w: rand_array!(&mut rng, bound; features, 4 * units),
            u: rand_array!(&mut rng, bound; units, 4 * units),
            b,
            activation,
        })
    }

    pub fn features(&self) -> usize {
        self.w.nrows()
    }

    pub fn units(&self) -> usize {
        self.u.nrows()
    }

    /// Same weights, different activation.
    pub fn with_activation(&self, activation: Activation) -> Self {
        Self {
            activation,
            ..self.clone()
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "LSTM ({} -> {}) activation: {}, params: {}",
            self.features(),
            self.units(),
            self.activation.name(),
            self.w.len() + self.u.len() + self.b.len()
        )
    }

    /// Runs the cell over `x` of shape `(batch, steps, features)` from zero state.
    pub fn forward(&self, x: &Array3<f64>) -> Result<LstmState> {
        let (batch, steps, features) = x.dim();
        if features != self.features() {
            return Err(ApproxError::InvalidInputShape(format!(
                "expected {} features per step, got {}",
                self.features(),
                features
            )));
        }
        let n = self.units();

        let mut outputs = Array3::zeros((batch, steps, n));
        let mut h = Array2::<f64>::zeros((batch, n));
        let mut c = Array2::<f64>::zeros((batch, n));

        for t in 0..steps {
            let z = x.slice(s![.., t, ..]).dot(&self.w) + h.dot(&self.u) + &self.b;

            let i = sigmoid(&z.slice(s![.., 0..n]));
            let f = sigmoid(&z.slice(s![.., n..2 * n]));
            let g = apply_array(&self.activation, &z.slice(s![.., 2 * n..3 * n]));
            let o = sigmoid(&z.slice(s![.., 3 * n..]));

            c = &f * &c + &i * &g;
            h = &o * &apply_array(&self.activation, &c);
            outputs.slice_mut(s![.., t, ..]).assign(&h);
        }

        Ok(LstmState {
            outputs,
            hidden: h,
            cell: c,
        })
    }

    #[tracing::instrument(level = "debug", skip_all, fields(activation = self.activation.name()))]
    pub fn state_drift(&self, x: &Array3<f64>) -> Result<StateDrift> {
        let approx = self.forward(x)?;
        let exact = self.with_activation(Activation::Tanh).forward(x)?;

        let drift = StateDrift {
            hidden_mse: mse(&approx.hidden, &exact.hidden),
            cell_mse: mse(&approx.cell, &exact.cell),
        };
        tracing::debug!(hidden = drift.hidden_mse, cell = drift.cell_mse, "state drift");
        Ok(drift)
    }
}

fn sigmoid<S: Data<Elem = f64>>(z: &ArrayBase<S, Ix2>) -> Array2<f64> {
    z.mapv(|z| 1.0 / (1.0 + (-z).exp()))
}

fn mse(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    (a - b).mapv(|d| d * d).mean().unwrap_or(0.0)
}
