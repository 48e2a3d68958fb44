//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` and the astronomical unit,
//! - the fixed step size `dt`,
//! - the policy applied to zero / near-zero separations

/// Universal gravitational constant (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11;

/// One astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// One simulated day, the default fixed step (s)
pub const DAY: f64 = 3600.0 * 24.0;

/// How the force law treats coincident or nearly coincident bodies
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeparationPolicy {
    /// No guarding: zero separation produces non-finite forces that propagate
    #[default]
    Unguarded,
    /// Separations below `min` meters are treated as `min`
    Clamp { min: f64 },
    /// Zero separation fails the step with `SimError::DegenerateSeparation`
    Reject,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size (s)
    pub au: f64, // meters per AU, used to scale initial positions
    pub separation: SeparationPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            dt: DAY,
            au: AU,
            separation: SeparationPolicy::Unguarded,
        }
    }
}
