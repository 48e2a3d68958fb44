//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator, trail capacity, separation policy, tick rate
//! - [`ParametersConfig`] – physical constants and the fixed step size
//! - [`DisplayConfig`]    – window size and display scale
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and every field is optional; anything left out falls back
//! to the built-in solar system values. Leaving out `bodies` entirely gives
//! the built-in nine bodies.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!   trail_capacity: 2000    # omit for an unbounded trail
//!   separation: "unguarded" # or "reject", or !clamp 1.0e6 (meters)
//!   fps: 60.0
//!
//! parameters:
//!   G: 6.67428e-11
//!   dt: 86400.0             # one day per tick
//!   au: 1.496e11
//!
//! display:
//!   width: 800
//!   height: 800
//!   px_per_au: 100.0
//!
//! bodies:
//!   - name: "SUN"
//!     x: [0.0, 0.0]         # AU
//!     v: [0.0, 0.0]         # m/s
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [253, 184, 19]
//!     anchor: true
//!   - name: "EARTH"
//!     x: [-1.0, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [107, 147, 214]
//! ```

use serde::Deserialize;

use crate::simulation::params::{AU, DAY, GRAVITATIONAL_CONSTANT};

/// Which integrator method is used by the engine
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit euler, one force evaluation, reference behavior
    #[default]
    SymplecticEuler,

    #[serde(rename = "verlet")] // Velocity verlet, two force evaluations per step
    Verlet,
}

/// Treatment of zero / near-zero separations
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeparationConfig {
    #[default]
    Unguarded,
    Reject,
    Clamp(f64), // minimum separation in meters
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub trail_capacity: Option<usize>, // `None` - keep the whole orbit history
    pub separation: SeparationConfig,
    pub fps: Option<f64>, // fixed ticks per second, 60 if omitted
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub dt: f64, // time step size (s)
    pub au: f64, // meters per astronomical unit
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            dt: DAY,
            au: AU,
        }
    }
}

/// Window and scale used by the viewer
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub px_per_au: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            px_per_au: 100.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // Initial position in AU
    #[serde(default)]
    pub v: [f64; 2], // Initial velocity in m/s
    pub m: f64,      // Mass in kg
    #[serde(default = "default_radius")]
    pub radius: f32, // Display radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub anchor: bool,
}

fn default_radius() -> f32 {
    8.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub display: DisplayConfig,
    pub bodies: Option<Vec<BodyConfig>>, // `None` - built-in solar system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
