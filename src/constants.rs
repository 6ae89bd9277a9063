// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Projectile Constants
pub const BALL_DRAG_COEFFICIENT: f64 = 0.47; // sphere
pub const BALL_RADIUS: f64 = 0.005; // m

// Exaggerates the quadratic drag so the effect is visible at throwing speeds.
pub const DRAG_SCALE_FACTOR: f64 = 2.0;

// Launch Conditions
pub const LAUNCH_SPEED: f64 = 4.5; // m/s
pub const LAUNCH_ANGLE_DEG: f64 = 45.0; // degrees
pub const LAUNCH_HEIGHT: f64 = 1.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MAX_SIMULATION_TIME: f64 = 5.0; // s, CLI default cutoff

// Masses offered for throwing, in grams
pub const MASS_MENU_GRAMS: [f64; 4] = [5.0, 100.0, 500.0, 1000.0];

// Playback
pub const PLAYBACK_STRIDE: usize = 3; // samples per frame
pub const MIN_PLOT_EXTENT: f64 = 3.0; // m
