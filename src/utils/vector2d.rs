use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg};

/// Plane vector in metres (positions) or metres per second (velocities).
/// `x` is horizontal distance from the launch point, `y` is height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Builds a vector from a magnitude and an angle in radians measured
    /// from the positive x axis.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Vector2D::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Unit vector, or `None` for the zero vector.
    pub fn try_normalize(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > 0.0 {
            Some(Vector2D::new(self.x / mag, self.y / mag))
        } else {
            None
        }
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        Vector2D::new(self * vector.x, self * vector.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_from_polar_at_45_degrees() {
        let v = Vector2D::from_polar(4.5, FRAC_PI_4);
        assert_relative_eq!(v.x, v.y, epsilon = 1e-12);
        assert_relative_eq!(v.magnitude(), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_has_no_direction() {
        assert_eq!(Vector2D::ZERO.try_normalize(), None);

        let unit = Vector2D::new(3.0, -4.0).try_normalize().unwrap();
        assert_relative_eq!(unit.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(unit.y, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_add_assign_and_scaling() {
        let mut p = Vector2D::new(1.0, 2.0);
        p += 0.5 * Vector2D::new(2.0, -2.0);
        assert_eq!(p, Vector2D::new(2.0, 1.0));
        assert_eq!(-p * 2.0, Vector2D::new(-4.0, -2.0));
    }
}
