use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, BALL_DRAG_COEFFICIENT, BALL_RADIUS, DRAG_SCALE_FACTOR, GRAVITY,
    LAUNCH_ANGLE_DEG, LAUNCH_HEIGHT, LAUNCH_SPEED,
};
use crate::errors::{ensure_non_negative, ensure_positive, SimulationError};
use crate::utils::vector2d::Vector2D;

/// Physical constants and launch conditions shared by every throw.
///
/// Built once through [`ConstantsBuilder`] and never mutated afterwards. The
/// cross-sectional area is derived from the radius at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConstants {
    gravity: f64,
    air_density: f64,
    drag_coefficient: f64,
    radius: f64,
    cross_sectional_area: f64,
    drag_scale: f64,
    launch_speed: f64,
    launch_angle: f64,
    launch_height: f64,
}

impl SimulationConstants {
    pub fn builder() -> ConstantsBuilder {
        ConstantsBuilder::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let builder: ConstantsBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn cross_sectional_area(&self) -> f64 {
        self.cross_sectional_area
    }

    pub fn drag_scale(&self) -> f64 {
        self.drag_scale
    }

    pub fn launch_speed(&self) -> f64 {
        self.launch_speed
    }

    /// Launch angle in radians.
    pub fn launch_angle(&self) -> f64 {
        self.launch_angle
    }

    pub fn launch_height(&self) -> f64 {
        self.launch_height
    }

    pub fn launch_position(&self) -> Vector2D {
        Vector2D::new(0.0, self.launch_height)
    }

    pub fn launch_velocity(&self) -> Vector2D {
        Vector2D::from_polar(self.launch_speed, self.launch_angle)
    }

    /// Range of the same throw in vacuum from ground level, `v0²·sin(2θ)/g`.
    pub fn vacuum_range(&self) -> f64 {
        self.launch_speed.powi(2) * (2.0 * self.launch_angle).sin() / self.gravity
    }
}

impl Default for SimulationConstants {
    fn default() -> Self {
        let radius = BALL_RADIUS;
        SimulationConstants {
            gravity: GRAVITY,
            air_density: AIR_DENSITY_SEA_LEVEL,
            drag_coefficient: BALL_DRAG_COEFFICIENT,
            radius,
            cross_sectional_area: PI * radius.powi(2),
            drag_scale: DRAG_SCALE_FACTOR,
            launch_speed: LAUNCH_SPEED,
            launch_angle: LAUNCH_ANGLE_DEG.to_radians(),
            launch_height: LAUNCH_HEIGHT,
        }
    }
}

/// Mutable staging area for [`SimulationConstants`]. Also the shape of the
/// JSON constants file; omitted keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstantsBuilder {
    pub gravity: f64,
    pub air_density: f64,
    pub drag_coefficient: f64,
    pub radius: f64,
    pub drag_scale: f64,
    pub launch_speed: f64,
    pub launch_angle_deg: f64,
    pub launch_height: f64,
}

impl Default for ConstantsBuilder {
    fn default() -> Self {
        ConstantsBuilder {
            gravity: GRAVITY,
            air_density: AIR_DENSITY_SEA_LEVEL,
            drag_coefficient: BALL_DRAG_COEFFICIENT,
            radius: BALL_RADIUS,
            drag_scale: DRAG_SCALE_FACTOR,
            launch_speed: LAUNCH_SPEED,
            launch_angle_deg: LAUNCH_ANGLE_DEG,
            launch_height: LAUNCH_HEIGHT,
        }
    }
}

impl ConstantsBuilder {
    pub fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    pub fn drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn drag_scale(mut self, drag_scale: f64) -> Self {
        self.drag_scale = drag_scale;
        self
    }

    /// Launch speed (m/s), angle (degrees) and height (m).
    pub fn launch(mut self, speed: f64, angle_deg: f64, height: f64) -> Self {
        self.launch_speed = speed;
        self.launch_angle_deg = angle_deg;
        self.launch_height = height;
        self
    }

    pub fn build(self) -> Result<SimulationConstants, SimulationError> {
        ensure_positive("gravity", self.gravity)?;
        ensure_non_negative("air density", self.air_density)?;
        ensure_non_negative("drag coefficient", self.drag_coefficient)?;
        ensure_non_negative("radius", self.radius)?;
        ensure_non_negative("drag scale", self.drag_scale)?;
        ensure_non_negative("launch speed", self.launch_speed)?;
        ensure_non_negative("launch height", self.launch_height)?;
        if !self.launch_speed.powi(2).is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "launch speed {} overflows the drag computation",
                self.launch_speed
            )));
        }
        if !self.launch_angle_deg.is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "launch angle must be finite, got {}",
                self.launch_angle_deg
            )));
        }

        Ok(SimulationConstants {
            gravity: self.gravity,
            air_density: self.air_density,
            drag_coefficient: self.drag_coefficient,
            radius: self.radius,
            cross_sectional_area: PI * self.radius.powi(2),
            drag_scale: self.drag_scale,
            launch_speed: self.launch_speed,
            launch_angle: self.launch_angle_deg.to_radians(),
            launch_height: self.launch_height,
        })
    }
}
