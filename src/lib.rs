pub mod constants;
pub mod errors;
pub mod session;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::environment::{ConstantsBuilder, SimulationConstants};
pub use trajectory_system::integrator::{simulate, simulate_batch, SimulationRequest};
pub use trajectory_system::kinematics::Kinematics;
pub use trajectory_system::trajectory::{Termination, Trajectory, TrajectorySample};

// Re-export the caller-side session state
pub use session::history::{HistoryEntry, SharedHistory, TrajectoryHistory, TrajectoryId};
pub use session::palette::{style_for, LineStyle, TrajectoryStyle};
pub use session::playback::{PlaybackPlan, PlotBounds};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
