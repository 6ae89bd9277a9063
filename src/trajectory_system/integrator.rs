use rayon::prelude::*;

use crate::constants::TIME_STEP;
use crate::errors::{ensure_positive, SimulationError};
use crate::utils::units::grams_to_kilograms;

use super::aerodynamics::Aerodynamics;
use super::environment::SimulationConstants;
use super::kinematics::Kinematics;
use super::trajectory::{Termination, Trajectory, TrajectorySample};

/// One throw: mass in kilograms, drag toggle, fixed step and optional cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRequest {
    pub mass: f64,
    pub drag_enabled: bool,
    pub time_step: f64,
    pub max_time: Option<f64>,
}

impl SimulationRequest {
    pub fn new(mass: f64, drag_enabled: bool) -> Self {
        SimulationRequest {
            mass,
            drag_enabled,
            time_step: TIME_STEP,
            max_time: None,
        }
    }

    pub fn from_grams(mass_grams: f64, drag_enabled: bool) -> Self {
        SimulationRequest::new(grams_to_kilograms(mass_grams), drag_enabled)
    }

    pub fn with_time_step(self, time_step: f64) -> Self {
        SimulationRequest { time_step, ..self }
    }

    pub fn with_max_time(self, max_time: Option<f64>) -> Self {
        SimulationRequest { max_time, ..self }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        ensure_positive("mass", self.mass)?;
        ensure_positive("time step", self.time_step)?;
        if let Some(max_time) = self.max_time {
            ensure_positive("max time", max_time)?;
        }
        Ok(())
    }
}

/// Integrates one throw from launch until the first step that ends below the
/// ground, or until `max_time` has elapsed.
///
/// The ground sample is the stepped position with `y` clamped to zero, so the
/// reported landing distance carries a discretization error of up to one
/// step of horizontal travel.
///
/// The step size is fixed. When drag deceleration times `dt` exceeds the
/// speed (masses around a milligram and below with the default ball), one
/// step reverses the velocity instead of slowing it, and the ball can land
/// behind the launch point. A state that overflows to a non-finite value is
/// reported as `InvalidInput`.
pub fn simulate(
    constants: &SimulationConstants,
    request: &SimulationRequest,
) -> Result<Trajectory, SimulationError> {
    request.validate()?;

    let aerodynamics = Aerodynamics::from_constants(constants);
    let dt = request.time_step;
    let mut state = Kinematics::new(constants.launch_position(), constants.launch_velocity());
    let mut samples = vec![TrajectorySample::new(state.time, state.position)];

    let termination = loop {
        if let Some(max_time) = request.max_time {
            if state.time >= max_time {
                break Termination::TimeLimit;
            }
        }

        let acceleration = aerodynamics.acceleration(
            state.velocity,
            request.mass,
            constants.gravity(),
            request.drag_enabled,
        );
        state.step(acceleration, dt);

        if !state.is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "integration diverged at t = {} s; reduce the time step",
                state.time + dt
            )));
        }

        if state.is_below_ground() {
            state.position.y = 0.0;
            samples.push(TrajectorySample::new(state.time + dt, state.position));
            break Termination::GroundContact;
        }

        state.time += dt;
        samples.push(TrajectorySample::new(state.time, state.position));
    };

    Ok(Trajectory::new(
        request.mass,
        request.drag_enabled,
        termination,
        samples,
    ))
}

/// Runs independent requests in parallel. Results keep the input order.
pub fn simulate_batch(
    constants: &SimulationConstants,
    requests: &[SimulationRequest],
) -> Vec<Result<Trajectory, SimulationError>> {
    requests
        .par_iter()
        .map(|request| simulate(constants, request))
        .collect()
}
