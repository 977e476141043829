use crate::constants::COULOMB_CONSTANT;
use crate::traits::{ForceLaw, Scalar};
use std::fmt;

/// Magnitude of the electrostatic force between charges `q1` and `q2` (Coulombs)
/// separated by `distance` (metres), in Newtons.
///
/// `F = k * |q1 * q2| / d^2`. A zero distance returns positive infinity instead of
/// dividing by zero.
pub fn coulomb_force<T: Scalar>(q1: T, q2: T, distance: T) -> T {
    if distance == T::zero() {
        return T::infinity();
    }
    let k = T::from_f64(COULOMB_CONSTANT).unwrap();
    k * (q1 * q2).abs() / (distance * distance)
}

/// Coulomb's law as a [`ForceLaw`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoulombLaw;

impl<T: Scalar> ForceLaw<T> for CoulombLaw {
    fn magnitude(&self, a: T, b: T, distance: T) -> T {
        coulomb_force(a, b, distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Like charges push apart.
    Repulsive,
    /// Opposite charges pull together.
    Attractive,
    /// At least one charge is zero.
    Null,
}

impl Interaction {
    /// Classifies the interaction from the sign of `q1 * q2`.
    pub fn classify<T: Scalar>(q1: T, q2: T) -> Self {
        let product = q1 * q2;
        if product > T::zero() {
            Interaction::Repulsive
        } else if product < T::zero() {
            Interaction::Attractive
        } else {
            Interaction::Null
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interaction::Repulsive => "REPULSIVE",
            Interaction::Attractive => "ATTRACTIVE",
            Interaction::Null => "NULL",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline result for a single charge pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceReport {
    pub q1: f64,
    pub q2: f64,
    pub distance: f64,
    pub force: f64,
    pub interaction: Interaction,
}

impl ForceReport {
    pub fn evaluate(q1: f64, q2: f64, distance: f64) -> Self {
        Self {
            q1,
            q2,
            distance,
            force: coulomb_force(q1, q2, distance),
            interaction: Interaction::classify(q1, q2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1e-300);
        assert!(
            ((actual - expected) / scale).abs() < 1e-12,
            "expected {expected:e}, got {actual:e}"
        );
    }

    #[test]
    fn coulomb_force_matches_closed_form() {
        let cases: [(f64, f64, f64); 4] = [
            (1e-6, 1e-6, 1.0),
            (3e-9, -7e-9, 0.02),
            (-2.5e-3, -4e-4, 12.0),
            (5.0, 1e-12, 1e-3),
        ];
        for (q1, q2, d) in cases {
            let expected = COULOMB_CONSTANT * (q1 * q2).abs() / (d * d);
            assert_close(coulomb_force(q1, q2, d), expected);
        }
    }

    #[test]
    fn coulomb_force_is_symmetric_and_non_negative() {
        let pairs = [(1e-6, -3e-6), (-4e-9, -2e-9), (7e-3, 0.0)];
        for (q1, q2) in pairs {
            let forward = coulomb_force(q1, q2, 0.3);
            let reverse = coulomb_force(q2, q1, 0.3);
            assert_eq!(forward, reverse);
            assert!(forward >= 0.0);
        }
    }

    #[test]
    fn zero_distance_yields_positive_infinity() {
        assert_eq!(coulomb_force(1e-6, 1e-6, 0.0), f64::INFINITY);
        assert_eq!(coulomb_force(-1e-6, 2e-6, 0.0), f64::INFINITY);
        assert_eq!(coulomb_force(1.0_f32, -1.0_f32, 0.0_f32), f32::INFINITY);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let first = coulomb_force(2.2e-7, -9.1e-8, 0.37);
        for _ in 0..10 {
            assert_eq!(coulomb_force(2.2e-7, -9.1e-8, 0.37), first);
        }
    }

    #[test]
    fn like_charges_one_metre_apart() {
        let report = ForceReport::evaluate(1e-6, 1e-6, 1.0);
        assert!((report.force - 8.9876e-3).abs() < 1e-7);
        assert_eq!(report.interaction, Interaction::Repulsive);
    }

    #[test]
    fn opposite_charges_half_metre_apart() {
        let report = ForceReport::evaluate(1e-6, -1e-6, 0.5);
        assert!((report.force - 3.595e-2).abs() < 1e-5);
        assert_eq!(report.interaction, Interaction::Attractive);
    }

    #[test]
    fn zero_charge_gives_null_interaction() {
        let report = ForceReport::evaluate(0.0, 5e-6, 1.0);
        assert_eq!(report.force, 0.0);
        assert_eq!(report.interaction, Interaction::Null);
        assert_eq!(report.interaction.label(), "NULL");
    }

    #[test]
    fn classify_follows_product_sign() {
        assert_eq!(Interaction::classify(2.0, 3.0), Interaction::Repulsive);
        assert_eq!(Interaction::classify(-2.0, -3.0), Interaction::Repulsive);
        assert_eq!(Interaction::classify(-2.0, 3.0), Interaction::Attractive);
        assert_eq!(Interaction::classify(0.0, -3.0), Interaction::Null);
        assert_eq!(Interaction::classify(0.0_f32, 0.0_f32), Interaction::Null);
    }

    #[test]
    fn coulomb_law_delegates_to_evaluator() {
        let law = CoulombLaw;
        let via_trait: f64 = law.magnitude(4e-6, -1e-6, 0.2);
        assert_eq!(via_trait, coulomb_force(4e-6, -1e-6, 0.2));
    }
}
