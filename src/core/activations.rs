#[allow(unused)]
use crate::prelude::*;
use crate::core::custom_tanh::CustomTanh;
use crate::core::hlpa::Hlpa;
use crate::core::ppa::Ppa;
use crate::core::select::TanhApprox;
use fastapprox::fast::tanh as fast_tanh;

/// Names the tanh implementations that can occupy an activation slot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    Tanh,
    FastTanh,
    Ppa,
    Hlpa,
    CustomTanh,
}

impl ActivationKind {
    pub const ALL: [ActivationKind; 5] = [
        Self::Tanh,
        Self::FastTanh,
        Self::Ppa,
        Self::Hlpa,
        Self::CustomTanh,
    ];

    /// The three piecewise approximations, without the reference implementations.
    pub const APPROXIMATIONS: [ActivationKind; 3] = [Self::Ppa, Self::Hlpa, Self::CustomTanh];

    pub fn build(self) -> Result<Activation> {
        Ok(match self {
            Self::Tanh => Activation::Tanh,
            Self::FastTanh => Activation::FastTanh,
            Self::Ppa => Activation::Ppa(Ppa::new()?),
            Self::Hlpa => Activation::Hlpa(Hlpa::new()?),
            Self::CustomTanh => Activation::CustomTanh(CustomTanh::new()),
        })
    }
}

/// A built activation, ready to be applied.
#[derive(Debug, Clone)]
pub enum Activation {
    Tanh,
    FastTanh,
    Ppa(Ppa),
    Hlpa(Hlpa),
    CustomTanh(CustomTanh),
}

impl Activation {
    pub fn kind(&self) -> ActivationKind {
        match self {
            Self::Tanh => ActivationKind::Tanh,
            Self::FastTanh => ActivationKind::FastTanh,
            Self::Ppa(_) => ActivationKind::Ppa,
            Self::Hlpa(_) => ActivationKind::Hlpa,
            Self::CustomTanh(_) => ActivationKind::CustomTanh,
        }
    }

    pub fn forward<D: Dimension>(&self, z: Array<f64, D>) -> Array<f64, D> {
        z.mapv_into(|v| self.apply(v))
    }
}

impl TanhApprox for Activation {
    fn name(&self) -> &'static str {
        match self {
            Self::Tanh => "Standard Tanh",
            Self::FastTanh => "Fast Tanh",
            Self::Ppa(inner) => inner.name(),
            Self::Hlpa(inner) => inner.name(),
            Self::CustomTanh(inner) => inner.name(),
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Tanh => x.tanh(),
            Self::FastTanh => fast_tanh(x as f32) as f64,
            Self::Ppa(inner) => inner.apply(x),
            Self::Hlpa(inner) => inner.apply(x),
            Self::CustomTanh(inner) => inner.apply(x),
        }
    }
}
