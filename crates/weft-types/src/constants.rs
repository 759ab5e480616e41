//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). Fixed 50 Hz tick.
pub const DEFAULT_DT: f32 = 1.0 / 50.0;

/// Default number of full-weight relaxation passes per timestep.
pub const DEFAULT_SOLVE_ITERATIONS: u32 = 5;

/// Velocity retention for a point that touched nothing this step.
pub const AIR_FRICTION: f32 = 0.999;

/// Velocity retention for a point that hit a collider this step.
pub const CONTACT_FRICTION: f32 = 0.8;

/// Multiplier applied to the break threshold of reinforced links.
pub const STURDY_EXTENSIBILITY_FACTOR: f32 = 100.0;

/// Default bounce coefficients for collider contacts.
pub const DEFAULT_BOUNCE: f32 = 0.75;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
