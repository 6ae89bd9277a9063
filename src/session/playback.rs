use crate::constants::MIN_PLOT_EXTENT;
use crate::errors::SimulationError;
use crate::trajectory_system::trajectory::Trajectory;

use super::history::TrajectoryHistory;

/// Visible prefix lengths for animating a trajectory: `1, 1 + stride, ...`,
/// always finishing on the full length. Pacing between frames is up to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPlan {
    sample_count: usize,
    stride: usize,
    next: usize,
    finished: bool,
}

impl PlaybackPlan {
    pub fn new(sample_count: usize, stride: usize) -> Result<Self, SimulationError> {
        if stride == 0 {
            return Err(SimulationError::InvalidInput(
                "playback stride must be at least 1".to_string(),
            ));
        }

        Ok(PlaybackPlan {
            sample_count,
            stride,
            next: 1,
            finished: sample_count == 0,
        })
    }

    pub fn for_trajectory(trajectory: &Trajectory, stride: usize) -> Result<Self, SimulationError> {
        Self::new(trajectory.len(), stride)
    }

    pub fn frame_count(&self) -> usize {
        if self.sample_count == 0 {
            0
        } else {
            (self.sample_count - 1).div_ceil(self.stride) + 1
        }
    }
}

impl Iterator for PlaybackPlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }

        if self.next >= self.sample_count {
            self.finished = true;
            return Some(self.sample_count);
        }

        let visible = self.next;
        self.next += self.stride;
        Some(visible)
    }
}

/// Axis-aligned plot window in metres, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl PlotBounds {
    /// Smallest window containing the history and the current trajectory,
    /// never smaller than the default square view.
    pub fn covering(history: &TrajectoryHistory, current: Option<&Trajectory>) -> Self {
        let trajectories = history
            .iter()
            .map(|entry| &entry.trajectory)
            .chain(current);

        let mut bounds = PlotBounds {
            max_x: MIN_PLOT_EXTENT,
            max_y: MIN_PLOT_EXTENT,
        };
        for trajectory in trajectories {
            for sample in trajectory.samples() {
                bounds.max_x = bounds.max_x.max(sample.x);
                bounds.max_y = bounds.max_y.max(sample.y);
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::environment::SimulationConstants;
    use crate::trajectory_system::integrator::{simulate, SimulationRequest};

    #[test]
    fn test_frames_step_by_stride_and_end_full() {
        let frames: Vec<usize> = PlaybackPlan::new(10, 3).unwrap().collect();
        assert_eq!(frames, vec![1, 4, 7, 10]);

        let frames: Vec<usize> = PlaybackPlan::new(8, 3).unwrap().collect();
        assert_eq!(frames, vec![1, 4, 7, 8]);
    }

    #[test]
    fn test_frame_count_matches_iteration() {
        for count in 0..20 {
            for stride in 1..5 {
                let plan = PlaybackPlan::new(count, stride).unwrap();
                assert_eq!(plan.frame_count(), plan.clone().count(), "{} / {}", count, stride);
            }
        }
    }

    #[test]
    fn test_single_sample_is_one_frame() {
        let frames: Vec<usize> = PlaybackPlan::new(1, 3).unwrap().collect();
        assert_eq!(frames, vec![1]);
    }

    #[test]
    fn test_zero_stride_is_rejected() {
        assert!(matches!(
            PlaybackPlan::new(10, 0),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bounds_never_shrink_below_default_view() {
        let history = TrajectoryHistory::new();
        let bounds = PlotBounds::covering(&history, None);
        assert_eq!(bounds, PlotBounds { max_x: 3.0, max_y: 3.0 });
    }

    #[test]
    fn test_bounds_grow_to_fit_long_throw() {
        let constants = SimulationConstants::builder()
            .launch(20.0, 45.0, 0.0)
            .build()
            .unwrap();
        let trajectory = simulate(&constants, &SimulationRequest::new(0.1, true)).unwrap();

        let bounds = PlotBounds::covering(&TrajectoryHistory::new(), Some(&trajectory));
        assert_eq!(bounds.max_x, trajectory.landing_distance());
        assert_eq!(bounds.max_y, trajectory.max_height());
    }
}
