use crate::utils::vector2d::Vector2D;

use super::environment::SimulationConstants;

/// Quadratic drag on a sphere, `F = k · ½ · C_d · ρ · A · v²`, where `k` is
/// the configured drag scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
    pub air_density: f64,
    pub drag_scale: f64,
}

impl Aerodynamics {
    pub fn new(
        drag_coefficient: f64,
        cross_sectional_area: f64,
        air_density: f64,
        drag_scale: f64,
    ) -> Self {
        Aerodynamics {
            drag_coefficient,
            cross_sectional_area,
            air_density,
            drag_scale,
        }
    }

    pub fn from_constants(constants: &SimulationConstants) -> Self {
        Aerodynamics::new(
            constants.drag_coefficient(),
            constants.cross_sectional_area(),
            constants.air_density(),
            constants.drag_scale(),
        )
    }

    /// Drag force magnitude in newtons at the given speed.
    pub fn drag_force_magnitude(&self, speed: f64) -> f64 {
        let dynamic_pressure = 0.5 * self.air_density * speed.powi(2);
        self.drag_scale * self.drag_coefficient * self.cross_sectional_area * dynamic_pressure
    }

    /// Deceleration opposing `velocity`. Zero when the projectile is at rest.
    pub fn drag_deceleration(&self, velocity: Vector2D, mass: f64) -> Vector2D {
        match velocity.try_normalize() {
            Some(direction) => {
                let magnitude = self.drag_force_magnitude(velocity.magnitude()) / mass;
                -direction * magnitude
            }
            None => Vector2D::ZERO,
        }
    }

    /// Total acceleration: gravity plus drag when enabled.
    pub fn acceleration(
        &self,
        velocity: Vector2D,
        mass: f64,
        gravity: f64,
        drag_enabled: bool,
    ) -> Vector2D {
        let gravity_vector = Vector2D::new(0.0, -gravity);

        if drag_enabled {
            gravity_vector + self.drag_deceleration(velocity, mass)
        } else {
            gravity_vector
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn create_ball_aerodynamics() -> Aerodynamics {
        Aerodynamics::from_constants(&SimulationConstants::default())
    }

    #[test]
    fn test_drag_force_at_launch_speed() {
        let aero = create_ball_aerodynamics();

        // 2 · ½ · 0.47 · 1.225 · π·0.005² · 4.5²
        let expected = 0.47 * 1.225 * std::f64::consts::PI * 0.005_f64.powi(2) * 20.25;
        assert_relative_eq!(aero.drag_force_magnitude(4.5), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_opposes_velocity() {
        let aero = create_ball_aerodynamics();
        let velocity = Vector2D::new(3.0, -4.0);

        let decel = aero.drag_deceleration(velocity, 0.005);
        let magnitude = aero.drag_force_magnitude(5.0) / 0.005;

        assert_relative_eq!(decel.x, -0.6 * magnitude, epsilon = EPSILON);
        assert_relative_eq!(decel.y, 0.8 * magnitude, epsilon = EPSILON);
    }

    #[test]
    fn test_lighter_ball_decelerates_more() {
        let aero = create_ball_aerodynamics();
        let velocity = Vector2D::new(4.5, 0.0);

        let light = aero.drag_deceleration(velocity, 0.001).magnitude();
        let heavy = aero.drag_deceleration(velocity, 1.0).magnitude();

        assert_relative_eq!(light / heavy, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_velocity_edge_case() {
        let aero = create_ball_aerodynamics();

        assert_eq!(aero.drag_deceleration(Vector2D::ZERO, 0.1), Vector2D::ZERO);

        let accel = aero.acceleration(Vector2D::ZERO, 0.1, 9.81, true);
        assert_eq!(accel, Vector2D::new(0.0, -9.81));
        assert!(accel.x.is_finite() && accel.y.is_finite());
    }

    #[test]
    fn test_drag_disabled_is_pure_gravity() {
        let aero = create_ball_aerodynamics();
        let accel = aero.acceleration(Vector2D::new(10.0, 10.0), 0.005, 9.81, false);
        assert_eq!(accel, Vector2D::new(0.0, -9.81));
    }
}
