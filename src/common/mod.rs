//! Common types and error definitions for biped_walk
//!
//! This module provides the value types shared by the trajectory
//! generator, its configuration and the visualization helpers.

pub mod types;
pub mod error;

pub use types::*;
pub use error::*;
