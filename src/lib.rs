pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::error::SimError;
pub use simulation::trail::{OrbitTrail, TrailPolicy};
pub use simulation::params::{Parameters, SeparationPolicy, GRAVITATIONAL_CONSTANT, AU, DAY};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, gravitational_force, anchor_distances};
pub use simulation::integrator::{advance, verlet_integrator, step};
pub use simulation::scenario::{Scenario, solar_system_bodies};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, DisplayConfig, BodyConfig, ScenarioConfig, SeparationConfig};

pub use visualization::adapter::{ScreenMapping, BodyView, body_view, body_views, distance_label};
pub use visualization::solsim_vis2d::{run_2d, PhysicsStepPlugin, SimSet};
