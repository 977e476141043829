use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in force evaluations.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A pairwise central force between two point sources.
pub trait ForceLaw<T: Scalar> {
    /// Returns the force magnitude between sources `a` and `b` separated by `distance`.
    fn magnitude(&self, a: T, b: T, distance: T) -> T;
}
