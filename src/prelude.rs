pub use serde::{Deserialize, Serialize};

pub use ndarray::*;
pub use ndarray_rand::rand_distr::Uniform;
pub use ndarray_rand::RandomExt;

pub use crate::error::*;

// Internal re-exports
pub use crate::core::{
    Activation,
    ActivationKind,
    BlendFallback,
    CustomTanh,
    Hlpa,
    HlpaConfig,
    LstmCell,
    Polynomial,
    Ppa,
    PpaConfig,
    TanhApprox,
};
pub use crate::benchmark::sweep::{SweepConfig, SweepReport};
