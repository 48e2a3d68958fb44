//! Force contributors for the solar system engine
//!
//! Forces are in newtons. Every term reads a single snapshot of the
//! registry and adds its contribution into a per-body output buffer;
//! nothing here mutates the bodies.

use crate::simulation::error::SimError;
use crate::simulation::params::{SeparationPolicy, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::{Body, NVec2, System};

/// Newtonian force exerted by `other` on `body`.
///
/// `F = G * m1 * m2 / r^2`, directed from `body` toward `other`.
/// With `SeparationPolicy::Unguarded` a zero separation gives a non-finite vector.
pub fn gravitational_force(body: &Body, other: &Body, g: f64, separation: SeparationPolicy) -> Result<NVec2, SimError> {
    // r points from body to other, so body is pulled along +r
    let r = other.x - body.x;
    let mut dist = r.norm();

    match separation {
        SeparationPolicy::Unguarded => {}
        SeparationPolicy::Clamp { min } => {
            if dist == 0.0 {
                // no direction to pull along
                return Ok(NVec2::zeros());
            }
            dist = dist.max(min);
        }
        SeparationPolicy::Reject => {
            if dist == 0.0 {
                return Err(SimError::DegenerateSeparation {
                    body: body.name.clone(),
                    other: other.name.clone(),
                });
            }
        }
    }

    Ok(newton(r, dist, g * body.mass() * other.mass()))
}

// `gmm / dist^2` along the unit direction r / |r|
fn newton(r: NVec2, dist: f64, gmm: f64) -> NVec2 {
    let magnitude = gmm / (dist * dist);
    r * (magnitude / r.norm())
}

impl Body {
    /// Gravitational force exerted by `other` on `self`, with the standard `G`.
    ///
    /// If `other` is the anchor, this also refreshes `self.distance_to_anchor`.
    pub fn compute_pairwise_force(&mut self, other: &Body) -> NVec2 {
        let r = other.x - self.x;
        let dist = r.norm();
        if other.anchor {
            self.distance_to_anchor = dist;
        }
        newton(r, dist, GRAVITATIONAL_CONSTANT * self.mass() * other.mass())
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<(), SimError>;
}

/// Collection of force terms.
/// Their contributions are summed into a single net force per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(sys, out)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct-sum Newtonian gravity between every ordered pair of bodies
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub separation: SeparationPolicy,
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            separation: SeparationPolicy::Unguarded,
        }
    }
}

impl Force for NewtonianGravity {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        let n = sys.bodies.len();

        // Each body sums the pull of every other body, self excluded.
        // All reads come from the same snapshot.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let mut total = NVec2::zeros();

            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                total += gravitational_force(bi, bj, self.G, self.separation)?;
            }

            out[i] += total;
        }
        Ok(())
    }
}

/// Separation between each body and the anchor, taken from the current snapshot.
/// `None` for the anchor itself and for every body when there is no anchor.
pub fn anchor_distances(sys: &System) -> Vec<Option<f64>> {
    let anchor = sys.anchor_index();
    sys.bodies
        .iter()
        .enumerate()
        .map(|(i, b)| match anchor {
            Some(a) if a != i => Some((sys.bodies[a].x - b.x).norm()),
            _ => None,
        })
        .collect()
}
