//! Orbit trail: the ordered history of a body's post-step positions.
//!
//! The default trail is unbounded and grows by one point per tick. A bounded
//! trail keeps only the most recent `capacity` points (ring buffer); this only
//! changes how much of the path gets drawn, never the physics.

use std::collections::VecDeque;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailPolicy {
    #[default]
    Unbounded,
    Bounded(usize),
}

#[derive(Debug, Clone, Default)]
pub struct OrbitTrail {
    points: VecDeque<NVec2>,
    policy: TrailPolicy,
}

impl OrbitTrail {
    pub fn new(policy: TrailPolicy) -> Self {
        let points = match policy {
            TrailPolicy::Unbounded => VecDeque::new(),
            TrailPolicy::Bounded(cap) => VecDeque::with_capacity(cap),
        };
        Self { points, policy }
    }

    pub fn policy(&self) -> TrailPolicy {
        self.policy
    }

    pub fn push(&mut self, p: NVec2) {
        if let TrailPolicy::Bounded(cap) = self.policy {
            if cap == 0 {
                return;
            }
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }
}
