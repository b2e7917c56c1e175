// src/core.rs
pub mod activations;
pub mod custom_tanh;
pub mod hlpa;
pub mod layers;
pub mod polyfit;
pub mod ppa;
pub mod select;

// Re-export commonly used items
pub use activations::{Activation, ActivationKind};
pub use custom_tanh::CustomTanh;
pub use hlpa::{BlendFallback, Hlpa, HlpaConfig};
pub use layers::{LstmCell, LstmState, StateDrift};
pub use polyfit::{polyfit, Polynomial};
pub use ppa::{Ppa, PpaConfig};
pub use select::{apply_array, par_apply_inplace, Overwrite, TanhApprox};
