pub mod core;
pub mod error;
pub mod prelude;
pub mod utils;


// Re-export types
pub use crate::core::{Activation, ActivationKind, CustomTanh, Hlpa, Ppa, TanhApprox};
pub use crate::error::{ApproxError, Result};

pub mod benchmark {
    pub mod output;
    pub mod sweep;
}
