//! Visualization utilities for biped_walk
//!
//! Plots foot trajectory profiles against time using gnuplot.

use gnuplot::{AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{FeetTrajectoryPoint, Foot, FootState, WalkError, WalkResult};

/// Color palette for consistent styling
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const LEFT_FOOT: &str = "#35C788";
    pub const RIGHT_FOOT: &str = "#DD3355";
    pub const SEAM: &str = GRAY;
}

/// Scalar channel of one foot to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootField {
    Forward,
    Left,
    Heading,
    Height,
}

impl FootField {
    pub fn value(&self, state: &FootState) -> f64 {
        match self {
            FootField::Forward => state.forward,
            FootField::Left => state.left,
            FootField::Heading => state.heading,
            FootField::Height => state.height,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FootField::Forward => "forward",
            FootField::Left => "left",
            FootField::Heading => "heading",
            FootField::Height => "height",
        }
    }
}

/// Style for series rendering
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl SeriesStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Default style for a foot
    pub fn for_foot(foot: Foot, field: FootField) -> Self {
        match foot {
            Foot::Left => Self::new(colors::LEFT_FOOT, &format!("left {}", field.label())),
            Foot::Right => Self::new(colors::RIGHT_FOOT, &format!("right {}", field.label())),
        }
    }
}

/// Sample times `i * dt` for `n` samples
pub fn sample_times(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dt).collect()
}

/// Indices of the samples where one step hands over to the next
pub fn seam_indices(num_points: usize, samples_per_step: usize) -> Vec<usize> {
    if samples_per_step == 0 {
        return Vec::new();
    }
    (1..num_points / samples_per_step)
        .map(|k| k * samples_per_step - 1)
        .collect()
}

/// Extract one field of one foot from a trajectory
pub fn foot_series(points: &[FeetTrajectoryPoint], foot: Foot, field: FootField) -> Vec<f64> {
    points.iter().map(|p| field.value(&p.foot(foot))).collect()
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "t [s]".to_string(),
            y_label: "[m]".to_string(),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis label
    pub fn set_x_label(&mut self, label: &str) -> &mut Self {
        self.x_label = label.to_string();
        self
    }

    /// Set Y axis label
    pub fn set_y_label(&mut self, label: &str) -> &mut Self {
        self.y_label = label.to_string();
        self
    }

    /// Plot a series against time
    pub fn plot_series(&mut self, t: &[f64], values: &[f64], style: &SeriesStyle) -> &mut Self {
        self.figure.axes2d()
            .lines(t, values, &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self
    }

    /// Plot one field of one foot over a trajectory sampled every `dt`
    pub fn plot_foot(
        &mut self,
        points: &[FeetTrajectoryPoint],
        dt: f64,
        foot: Foot,
        field: FootField,
    ) -> &mut Self {
        let t = sample_times(points.len(), dt);
        let values = foot_series(points, foot, field);
        self.plot_series(&t, &values, &SeriesStyle::for_foot(foot, field))
    }

    /// Mark where consecutive steps of `samples_per_step` samples meet
    pub fn plot_seams(
        &mut self,
        points: &[FeetTrajectoryPoint],
        dt: f64,
        samples_per_step: usize,
        foot: Foot,
        field: FootField,
    ) -> &mut Self {
        let seams = seam_indices(points.len(), samples_per_step);
        let t: Vec<f64> = seams.iter().map(|&i| i as f64 * dt).collect();
        let values: Vec<f64> = seams.iter().map(|&i| field.value(&points[i].foot(foot))).collect();
        self.figure.axes2d()
            .points(&t, &values, &[
                Caption("Step seams"),
                Color(colors::SEAM),
                PointSymbol('O'),
                PointSize(1.0),
            ]);
        self
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> WalkResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| WalkError::Visualization(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
