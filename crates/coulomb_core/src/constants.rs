/// Coulomb's constant k in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.9875517873681764e9;

/// First distance of every sweep, in metres.
pub const SWEEP_START: f64 = 0.01;

/// Default upper end of a sweep, in metres.
pub const DEFAULT_MAX_DISTANCE: f64 = 1.0;

/// Default number of samples in a sweep.
pub const DEFAULT_SWEEP_POINTS: usize = 50;
