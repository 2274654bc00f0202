//! Utility modules for biped_walk

pub mod visualization;

pub use visualization::{Visualizer, SeriesStyle, FootField, colors};
