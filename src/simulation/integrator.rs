//! Fixed-step time integrators for the solar system
//!
//! Every step is split in two phases: a read-only pass that evaluates all
//! forces (and anchor distances) from one position snapshot, then a write
//! pass that updates every body. Forces never see partially-updated bodies.

use log::{debug, warn};

use super::error::SimError;
use super::forces::{anchor_distances, ForceSet};
use super::params::Parameters;
use super::scenario::Scenario;
use super::states::{NVec2, System};
use crate::configuration::config::IntegratorConfig;

/// Advance the system by one step of semi-implicit (symplectic) Euler.
///
/// `v += F/m * dt` first, then `x += v * dt` with the updated velocity.
/// Each body's new position is appended to its orbit trail.
pub fn advance(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.bodies.len();
    let dt = params.dt;

    // Phase 1: read-only, pre-step snapshot
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f)?;
    let distances = anchor_distances(&*sys);

    // Phase 2: apply
    for ((b, f), d) in sys.bodies.iter_mut().zip(f.iter()).zip(distances) {
        b.v += *f / b.mass() * dt;
        b.x += b.v * dt;
        if let Some(d) = d {
            b.distance_to_anchor = d;
        }
        b.orbit.push(b.x);
    }

    sys.t += dt;
    sys.steps += 1;
    debug!("step {} done, t = {:.0} s", sys.steps, sys.t);

    Ok(())
}

/// Advance the system by one step using velocity–Verlet.
/// Uses two force evaluations per step; anchor distances come from the
/// pre-step snapshot like in [`advance`]. If either evaluation fails the
/// system is left as it was before the call.
pub fn verlet_integrator(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.bodies.len();
    let dt = params.dt;
    let half_dt = 0.5 * dt;

    // F_n from x_n
    let mut f_old = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f_old)?;
    let distances = anchor_distances(&*sys);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    // Drift: x_n+1 = x_n + dt * v_n+1/2
    let v_half: Vec<NVec2> = sys
        .bodies
        .iter()
        .zip(f_old.iter())
        .map(|(b, f)| b.v + *f / b.mass() * half_dt)
        .collect();
    let x_old: Vec<NVec2> = sys.bodies.iter().map(|b| b.x).collect();
    for ((b, x), v) in sys.bodies.iter_mut().zip(x_old.iter()).zip(v_half.iter()) {
        b.x = *x + *v * dt;
    }

    // F_n+1 from x_n+1; a failed evaluation puts the positions back
    let mut f_new = vec![NVec2::zeros(); n];
    if let Err(e) = forces.accumulate_forces(&*sys, &mut f_new) {
        for (b, x) in sys.bodies.iter_mut().zip(x_old) {
            b.x = x;
        }
        return Err(e);
    }

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (((b, f), v), d) in sys.bodies.iter_mut().zip(f_new.iter()).zip(v_half).zip(distances) {
        b.v = v + *f / b.mass() * half_dt;
        if let Some(d) = d {
            b.distance_to_anchor = d;
        }
        b.orbit.push(b.x);
    }

    sys.t += dt;
    sys.steps += 1;
    debug!("verlet step {} done, t = {:.0} s", sys.steps, sys.t);

    Ok(())
}

/// Advance a scenario by one tick with its configured integrator
pub fn step(scenario: &mut Scenario) -> Result<(), SimError> {
    let Scenario {
        engine,
        parameters,
        system,
        forces,
        ..
    } = scenario;

    let was_finite = system.is_finite();
    match engine.integrator {
        IntegratorConfig::SymplecticEuler => advance(system, forces, parameters)?,
        IntegratorConfig::Verlet => verlet_integrator(system, forces, parameters)?,
    }

    if was_finite && !system.is_finite() {
        warn!("non-finite body state after step {} (coincident bodies?)", system.steps);
    }
    Ok(())
}
