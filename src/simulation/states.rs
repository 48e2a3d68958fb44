//! Core state types for the solar system simulation.
//!
//! - `Body`   one gravitating point mass, drawn as a disc
//! - `System` the ordered body registry plus simulated time
//!
//! Positions are meters, velocities meters/second, masses kilograms.

use nalgebra::Vector2;

use crate::simulation::error::SimError;
use crate::simulation::trail::{OrbitTrail, TrailPolicy};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, fixed at construction
    pub anchor: bool, // true for the star
    pub radius: f32, // display radius (px)
    pub color: [u8; 3], // display color
    pub distance_to_anchor: f64, // cached, meters
    pub orbit: OrbitTrail,
}

impl Body {
    /// Create a body with the given initial state. Mass must be finite and > 0.
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        let name = name.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { name, mass: m });
        }

        Ok(Self {
            name,
            x,
            v,
            m,
            anchor: false,
            radius: 1.0,
            color: [255, 255, 255],
            distance_to_anchor: 0.0,
            orbit: OrbitTrail::default(),
        })
    }

    /// Mark this body as the anchor (the star)
    pub fn as_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn with_display(mut self, radius: f32, color: [u8; 3]) -> Self {
        self.radius = radius;
        self.color = color;
        self
    }

    pub fn with_trail(mut self, policy: TrailPolicy) -> Self {
        self.orbit = OrbitTrail::new(policy);
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // registry, fixed order
    pub t: f64, // simulated time (s)
    pub steps: u64, // ticks applied so far
}

impl System {
    /// Build a registry. At most one body may carry the anchor flag.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        let mut anchors = bodies.iter().filter(|b| b.anchor);
        if let (Some(first), Some(second)) = (anchors.next(), anchors.next()) {
            return Err(SimError::MultipleAnchors {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        Ok(Self { bodies, t: 0.0, steps: 0 })
    }

    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.anchor)
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    pub fn center_of_mass(&self) -> NVec2 {
        let m = self.total_mass();
        if m == 0.0 {
            return NVec2::zeros();
        }
        self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.x * b.m) / m
    }

    /// Mass-weighted average velocity
    pub fn center_of_mass_velocity(&self) -> NVec2 {
        let m = self.total_mass();
        if m == 0.0 {
            return NVec2::zeros();
        }
        self.total_momentum() / m
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
    }

    /// Pairwise Newtonian potential energy, each unordered pair counted once
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let bi = &self.bodies[i];
                let bj = &self.bodies[j];
                u -= g * bi.m * bj.m / (bj.x - bi.x).norm();
            }
        }
        u
    }

    /// True when every position and velocity is finite
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| {
            b.x.iter().chain(b.v.iter()).all(|c| c.is_finite())
        })
    }
}
