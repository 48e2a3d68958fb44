//! High-level runtime engine settings
//!
//! Selects the integrator, the orbit trail policy and the
//! fixed tick rate used when running a `Scenario`

use crate::configuration::config::IntegratorConfig;
use crate::simulation::trail::TrailPolicy;

/// Target ticks (and frames) per second
pub const DEFAULT_FPS: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // symplectic euler or verlet
    pub trail: TrailPolicy, // unbounded unless a capacity is configured
    pub fps: f64, // fixed tick rate
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::SymplecticEuler,
            trail: TrailPolicy::Unbounded,
            fps: DEFAULT_FPS,
        }
    }
}
