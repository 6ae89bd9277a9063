use crate::utils::vector2d::Vector2D;

/// State of a point mass in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub time: f64,
}

impl Kinematics {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Kinematics {
            position,
            velocity,
            time: 0.0,
        }
    }

    /// Semi-implicit Euler: velocity is advanced first and the new velocity
    /// moves the position. `time` is left to the caller.
    pub fn step(&mut self, acceleration: Vector2D, delta_time: f64) {
        self.velocity += acceleration * delta_time;
        self.position += self.velocity * delta_time;
    }

    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.velocity.x.is_finite()
            && self.velocity.y.is_finite()
    }

    pub fn is_below_ground(&self) -> bool {
        self.position.y < 0.0
    }
}
