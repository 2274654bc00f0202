//! Walking step trajectories
//!
//! Generates the foot motion connecting one planted footstep to the next.

pub mod params;
pub mod feet_trajectory;
pub mod analysis;

pub use params::Params;
pub use feet_trajectory::{generate, generate_steps, FeetTrajectory};
pub use analysis::{max_consecutive_delta, peak_lift};
