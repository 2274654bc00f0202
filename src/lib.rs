//! biped_walk - swing and stance foot trajectories for biped walking
//!
//! This crate generates the foot motion that connects one planted footstep
//! to the next: a half-cosine blend of both feet's body-relative state plus
//! a sinusoidal lift of the swing foot, sampled at the control rate.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod walk;

// Re-export common types for convenience
pub use common::{FeetTrajectoryPoint, FootState, Foot, Phase};
pub use common::{WalkError, WalkResult};
pub use walk::{generate, generate_steps, FeetTrajectory, Params};
