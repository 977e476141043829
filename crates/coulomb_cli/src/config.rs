use coulomb_core::constants::DEFAULT_SWEEP_POINTS;
use std::path::PathBuf;

/// Where and how large the force-vs-distance chart is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("coulomb_force.svg"),
            width: 1000,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Samples taken between 0.01 m and the requested maximum distance.
    pub sweep_points: usize,
    /// The sampled table prints every `sweep_points / table_divisions`-th row.
    pub table_divisions: usize,
    pub chart: ChartConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sweep_points: DEFAULT_SWEEP_POINTS,
            table_divisions: 5,
            chart: ChartConfig::default(),
        }
    }
}
