pub mod aerodynamics;
pub mod environment;
pub mod integrator;
pub mod kinematics;
pub mod trajectory;
