use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// A drop-in replacement for `tanh`, evaluated one element at a time.
///
/// Implementors are immutable once built, so a single instance can be shared across
/// threads and applied to any number of arrays.
pub trait TanhApprox: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, x: f64) -> f64;
}

/// Elementwise lifting of [`TanhApprox::apply`]. The output has the shape of `x`.
pub fn apply_array<A, S, D>(approx: &A, x: &ArrayBase<S, D>) -> Array<f64, D>
where
    A: TanhApprox + ?Sized,
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| approx.apply(v))
}

/// Same as [`apply_array`] but in place and spread over the rayon pool.
pub fn par_apply_inplace<A, S, D>(approx: &A, x: &mut ArrayBase<S, D>)
where
    A: TanhApprox + ?Sized,
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    x.par_mapv_inplace(|v| approx.apply(v));
}

/// Scalar form of a masked select chain: every `when` whose mask holds replaces the
/// current value, so the last matching mask wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overwrite(f64);

impl Overwrite {
    pub fn new(default: f64) -> Self {
        Self(default)
    }

    #[inline]
    pub fn when(self, mask: bool, value: impl FnOnce() -> f64) -> Self {
        if mask {
            Self(value())
        } else {
            self
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}
