use crate::constants::SWEEP_START;
use crate::coulomb::CoulombLaw;
use crate::traits::ForceLaw;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("Invalid sweep range: maximum distance {max} m must exceed {start} m.")]
    InvalidRange { start: f64, max: f64 },
    #[error("A sweep needs at least 2 samples, got {0}.")]
    TooFewSamples(usize),
}

/// Force samples over an evenly spaced distance range. Same index, same sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceSweep {
    pub distances: Vec<f64>,
    pub forces: Vec<f64>,
}

impl ForceSweep {
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.forces.iter().copied())
    }

    /// Every `len / divisions`-th sample, starting with the first.
    pub fn table_rows(&self, divisions: usize) -> Vec<(f64, f64)> {
        let stride = (self.len() / divisions.max(1)).max(1);
        self.samples().step_by(stride).collect()
    }
}

/// `samples` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples).map(|i| start + step * i as f64).collect();
            values[samples - 1] = end;
            values
        }
    }
}

/// Samples `law` from [`SWEEP_START`] to `max_distance` for the charge pair `(q1, q2)`.
pub fn sweep_force_law<L: ForceLaw<f64>>(
    law: &L,
    q1: f64,
    q2: f64,
    max_distance: f64,
    points: usize,
) -> Result<ForceSweep, SweepError> {
    if !max_distance.is_finite() || max_distance <= SWEEP_START {
        return Err(SweepError::InvalidRange {
            start: SWEEP_START,
            max: max_distance,
        });
    }
    if points < 2 {
        return Err(SweepError::TooFewSamples(points));
    }

    log::debug!("Sweeping {points} samples up to {max_distance} m for q1={q1:e}, q2={q2:e}");
    let distances = linspace(SWEEP_START, max_distance, points);
    let forces = distances
        .iter()
        .map(|&d| law.magnitude(q1, q2, d))
        .collect();
    Ok(ForceSweep { distances, forces })
}

/// Coulomb force sampled over `[0.01, max_distance]` m.
pub fn analyze_distance_variation(
    q1: f64,
    q2: f64,
    max_distance: f64,
    points: usize,
) -> Result<ForceSweep, SweepError> {
    sweep_force_law(&CoulombLaw, q1, q2, max_distance, points)
}
