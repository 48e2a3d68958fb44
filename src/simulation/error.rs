//! Error type for the simulation library

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share a position (zero separation) under `SeparationPolicy::Reject`
    DegenerateSeparation { body: String, other: String },
    InvalidMass { name: String, mass: f64 },
    MultipleAnchors { first: String, second: String },
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateSeparation { body, other } => {
                write!(f, "degenerate separation between {body} and {other}")
            }
            SimError::InvalidMass { name, mass } => {
                write!(f, "body {name} has invalid mass {mass} (must be finite and > 0)")
            }
            SimError::MultipleAnchors { first, second } => {
                write!(f, "more than one anchor body: {first} and {second}")
            }
            SimError::InvalidConfig(msg) => write!(f, "invalid scenario config: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
