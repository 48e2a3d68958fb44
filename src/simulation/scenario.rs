//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - display settings for the viewer (`DisplayConfig`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! per-frame physics system and the render adapter.

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::{BodyConfig, DisplayConfig, ScenarioConfig, SeparationConfig};
use crate::simulation::engine::{Engine, DEFAULT_FPS};
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::{Parameters, SeparationPolicy};
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::trail::TrailPolicy;

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub display: DisplayConfig,
    pub system: System,
    pub forces: ForceSet,
}

/// The Sun and the eight planets, in registry order.
/// Positions in AU, velocities in m/s, masses in kg.
pub fn solar_system_bodies() -> Vec<BodyConfig> {
    let body = |name: &str, x_au: f64, vy: f64, m: f64, radius: f32, color: [u8; 3]| BodyConfig {
        name: name.to_string(),
        x: [x_au, 0.0],
        v: [0.0, vy],
        m,
        radius,
        color,
        anchor: false,
    };

    let mut sun = body("SUN", 0.0, 0.0, 1.98892e30, 30.0, [253, 184, 19]);
    sun.anchor = true;

    vec![
        sun,
        body("EARTH", -1.0, 29.783e3, 5.9742e24, 16.0, [107, 147, 214]),
        body("MARS", -1.524, 24.077e3, 6.39e23, 12.0, [193, 68, 14]),
        body("MERCURY", 0.387, -47.4e3, 0.330e24, 8.0, [80, 78, 81]),
        body("VENUS", 0.723, -35.02e3, 4.8685e24, 14.0, [248, 226, 176]),
        body("JUPITER", 5.204, -13.06e3, 1898.13e24, 22.0, [227, 220, 203]),
        body("SATURN", 9.573, -9.68e3, 568.32e24, 19.0, [206, 184, 184]),
        body("URANUS", -19.165, 6.80e3, 86.81e24, 18.0, [101, 134, 139]),
        body("NEPTUNE", -30.178, 5.43e3, 102.40e24, 17.0, [91, 93, 223]),
    ]
}

impl Scenario {
    /// The built-in solar system with default engine and parameters
    pub fn solar_system() -> Result<Self, SimError> {
        Self::build_scenario(ScenarioConfig::default())
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let fps = e_cfg.fps.unwrap_or(DEFAULT_FPS);
        if !(fps.is_finite() && fps > 0.0) {
            return Err(SimError::InvalidConfig(format!("fps must be > 0, got {fps}")));
        }
        let engine = Engine {
            integrator: e_cfg.integrator,
            trail: match e_cfg.trail_capacity {
                Some(cap) => TrailPolicy::Bounded(cap),
                None => TrailPolicy::Unbounded,
            },
            fps,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
            return Err(SimError::InvalidConfig(format!("dt must be > 0, got {}", p_cfg.dt)));
        }
        if !(p_cfg.au.is_finite() && p_cfg.au > 0.0) {
            return Err(SimError::InvalidConfig(format!("au must be > 0, got {}", p_cfg.au)));
        }
        if !(p_cfg.G.is_finite() && p_cfg.G > 0.0) {
            return Err(SimError::InvalidConfig(format!("G must be > 0, got {}", p_cfg.G)));
        }
        let separation = match e_cfg.separation {
            SeparationConfig::Unguarded => SeparationPolicy::Unguarded,
            SeparationConfig::Reject => SeparationPolicy::Reject,
            SeparationConfig::Clamp(min) if min > 0.0 => SeparationPolicy::Clamp { min },
            SeparationConfig::Clamp(min) => {
                return Err(SimError::InvalidConfig(format!("clamp distance must be > 0, got {min}")));
            }
        };
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            au: p_cfg.au,
            separation,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, AU -> meters
        let body_cfgs = cfg.bodies.unwrap_or_else(solar_system_bodies);
        let bodies = body_cfgs
            .into_iter()
            .map(|bc| -> Result<Body, SimError> {
                let body = Body::new(
                    bc.name,
                    NVec2::new(bc.x[0], bc.x[1]) * parameters.au,
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                )?
                .with_display(bc.radius, bc.color)
                .with_trail(engine.trail);
                Ok(if bc.anchor { body.as_anchor() } else { body })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Initial system state: bodies at t = 0
        let system = System::new(bodies)?;

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            separation: parameters.separation,
        });

        info!(
            "scenario ready: {} bodies, dt = {} s, integrator {:?}, trail {:?}, separation {:?}",
            system.bodies.len(),
            parameters.dt,
            engine.integrator,
            engine.trail,
            parameters.separation
        );

        Ok(Self {
            engine,
            parameters,
            display: cfg.display,
            system,
            forces,
        })
    }
}
