use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::errors::SimulationError;
use crate::trajectory_system::trajectory::Trajectory;
use crate::utils::units::kilograms_to_grams;

use super::palette::{style_for, TrajectoryStyle};

/// Stable identity of a thrown trajectory within a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryId {
    pub mass_grams: f64,
    pub drag_enabled: bool,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: TrajectoryId,
    pub style: TrajectoryStyle,
    pub trajectory: Trajectory,
}

/// Previously thrown trajectories, drawn underneath the current one.
///
/// Sequence numbers keep counting across [`TrajectoryHistory::clear`] so an
/// id is never reused within one history.
#[derive(Debug, Default, Serialize)]
pub struct TrajectoryHistory {
    entries: Vec<HistoryEntry>,
    #[serde(skip)]
    next_sequence: u64,
}

impl TrajectoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, trajectory: Trajectory) -> &HistoryEntry {
        let mass_grams = kilograms_to_grams(trajectory.mass());
        let drag_enabled = trajectory.drag_enabled();
        let id = TrajectoryId {
            mass_grams,
            drag_enabled,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.entries.push(HistoryEntry {
            id,
            style: style_for(mass_grams, drag_enabled),
            trajectory,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// The "reset" action.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Landing distance and style of every entry, for the vertical marker
    /// and distance annotation drawn at each impact point.
    pub fn landing_markers(&self) -> Vec<(f64, &TrajectoryStyle)> {
        self.entries
            .iter()
            .map(|entry| (entry.trajectory.landing_distance(), &entry.style))
            .collect()
    }
}

/// History shared between threads; appends are serialized by a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<TrajectoryHistory>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends and returns the id assigned to the trajectory.
    pub fn push(&self, trajectory: Trajectory) -> Result<TrajectoryId, SimulationError> {
        let mut history = self
            .inner
            .lock()
            .map_err(|_| SimulationError::HistoryUnavailable)?;
        Ok(history.push(trajectory).id)
    }

    pub fn clear(&self) -> Result<(), SimulationError> {
        self.inner
            .lock()
            .map_err(|_| SimulationError::HistoryUnavailable)?
            .clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, SimulationError> {
        Ok(self
            .inner
            .lock()
            .map_err(|_| SimulationError::HistoryUnavailable)?
            .len())
    }

    /// Runs `f` with the history locked.
    pub fn with<R>(&self, f: impl FnOnce(&TrajectoryHistory) -> R) -> Result<R, SimulationError> {
        let history = self
            .inner
            .lock()
            .map_err(|_| SimulationError::HistoryUnavailable)?;
        Ok(f(&history))
    }
}
