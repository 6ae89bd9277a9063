use serde::Serialize;

use crate::utils::vector2d::Vector2D;

/// Why integration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    GroundContact,
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

impl TrajectorySample {
    pub fn new(time: f64, position: Vector2D) -> Self {
        TrajectorySample {
            time,
            x: position.x,
            y: position.y,
        }
    }
}

/// Output of one integration run. Never empty: the first sample is the
/// launch position at `t = 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    mass: f64,
    drag_enabled: bool,
    termination: Termination,
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub(crate) fn new(
        mass: f64,
        drag_enabled: bool,
        termination: Termination,
        samples: Vec<TrajectorySample>,
    ) -> Self {
        debug_assert!(!samples.is_empty());
        Trajectory {
            mass,
            drag_enabled,
            termination,
            samples,
        }
    }

    /// Projectile mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn is_truncated(&self) -> bool {
        self.termination == Termination::TimeLimit
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// `(x, y)` pairs in launch order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.x, s.y))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last_sample(&self) -> TrajectorySample {
        // Constructed non-empty.
        self.samples[self.samples.len() - 1]
    }

    /// Horizontal distance of the last sample. For a ground contact this is
    /// the first sample at or below the ground, not an interpolated crossing.
    pub fn landing_distance(&self) -> f64 {
        self.last_sample().x
    }

    pub fn flight_time(&self) -> f64 {
        self.last_sample().time
    }

    pub fn max_height(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_trajectory() -> Trajectory {
        let samples = vec![
            TrajectorySample::new(0.0, Vector2D::new(0.0, 1.0)),
            TrajectorySample::new(0.1, Vector2D::new(0.3, 1.2)),
            TrajectorySample::new(0.2, Vector2D::new(0.6, 0.9)),
            TrajectorySample::new(0.3, Vector2D::new(0.9, 0.0)),
        ];
        Trajectory::new(0.1, true, Termination::GroundContact, samples)
    }

    #[test]
    fn test_summary_values() {
        let trajectory = create_test_trajectory();

        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.landing_distance(), 0.9);
        assert_eq!(trajectory.flight_time(), 0.3);
        assert_eq!(trajectory.max_height(), 1.2);
        assert!(!trajectory.is_truncated());
    }

    #[test]
    fn test_points_follow_launch_order() {
        let trajectory = create_test_trajectory();
        let points: Vec<(f64, f64)> = trajectory.points().collect();

        assert_eq!(points.first(), Some(&(0.0, 1.0)));
        assert_eq!(points.last(), Some(&(0.9, 0.0)));
    }

    #[test]
    fn test_serializes_termination_in_snake_case() {
        let json = serde_json::to_value(create_test_trajectory()).unwrap();
        assert_eq!(json["termination"], "ground_contact");
        assert_eq!(json["samples"][3]["x"], 0.9);
    }
}
