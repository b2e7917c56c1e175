#[allow(unused)]
use crate::prelude::*;
use ndarray_rand::rand_distr::Normal;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Uniform random array in `[-bound, bound)` drawn from `rng`.
/// Callers need `Array`, `Uniform` and `RandomExt` in scope (the prelude has them).
#[macro_export]
macro_rules! rand_array {
    ($rng:expr, $bound:expr; $($x:expr),*) => {
        {
            Array::random_using(($($x,)*), Uniform::new(-$bound, $bound), $rng)
        }
    };
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Standard normal samples, reproducible through `seed`.
pub fn random_normal<Sh, D>(shape: Sh, seed: u64) -> Result<Array<f64, D>>
where
    Sh: ShapeBuilder<Dim = D>,
    D: Dimension,
{
    let normal = Normal::new(0.0, 1.0).map_err(|e| ApproxError::Other(e.to_string()))?;
    Ok(Array::random_using(shape, normal, &mut seeded_rng(seed)))
}
