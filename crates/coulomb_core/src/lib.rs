pub mod constants;
pub mod coulomb;
pub mod sweep;
/// The `coulomb_core` crate evaluates the electrostatic force between two point charges.
/// It is generic over the floating-point scalar so the same law serves `f64` and `f32` callers.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `ForceLaw` (pairwise force magnitude).
/// - **Coulomb**: the Coulomb evaluator, interaction classification and a bundled `ForceReport`.
/// - **Sweep**: evenly spaced force-vs-distance samples for charts and tables.
pub mod traits;

pub use coulomb::{coulomb_force, CoulombLaw, ForceReport, Interaction};
pub use sweep::{analyze_distance_variation, ForceSweep, SweepError};
