//! Common types used throughout biped_walk

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// Trajectory point as an 8-vector, ordered like the struct fields
pub type FeetVector = SVector<f64, 8>;

/// Index of `footh_l` in [`FeetVector`]
pub const FOOTH_L_INDEX: usize = 6;
/// Index of `footh_r` in [`FeetVector`]
pub const FOOTH_R_INDEX: usize = 7;

/// One of the two feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Foot {
    Left,
    Right,
}

impl Foot {
    pub fn other(&self) -> Foot {
        match self {
            Foot::Left => Foot::Right,
            Foot::Right => Foot::Left,
        }
    }
}

/// Which foot is airborne during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Left foot swings, right foot is planted
    LeftSwing,
    /// Right foot swings, left foot is planted
    RightSwing,
}

impl Phase {
    /// Build a phase from an "is left stance" flag (left stance means right swing)
    pub fn from_left_stance(is_left_stance: bool) -> Self {
        if is_left_stance {
            Phase::RightSwing
        } else {
            Phase::LeftSwing
        }
    }

    pub fn swing_foot(&self) -> Foot {
        match self {
            Phase::LeftSwing => Foot::Left,
            Phase::RightSwing => Foot::Right,
        }
    }

    pub fn stance_foot(&self) -> Foot {
        self.swing_foot().other()
    }

    /// Phase of the following step
    pub fn next(&self) -> Phase {
        match self {
            Phase::LeftSwing => Phase::RightSwing,
            Phase::RightSwing => Phase::LeftSwing,
        }
    }
}

/// Motion state of a single foot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootState {
    pub forward: f64,
    pub left: f64,
    pub heading: f64,
    pub height: f64,
}

impl FootState {
    pub fn new(forward: f64, left: f64, heading: f64, height: f64) -> Self {
        Self { forward, left, heading, height }
    }
}

/// Commanded state of both feet at one instant, relative to the body.
///
/// Lengths are in meters, headings in radians. `left_*` is positive to the
/// left of the body centerline and `footh_*` is the height above the ground.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeetTrajectoryPoint {
    pub forward_l: f64,
    pub forward_r: f64,
    pub left_l: f64,
    pub left_r: f64,
    pub heading_l: f64,
    pub heading_r: f64,
    pub footh_l: f64,
    pub footh_r: f64,
}

impl FeetTrajectoryPoint {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        forward_l: f64,
        forward_r: f64,
        left_l: f64,
        left_r: f64,
        heading_l: f64,
        heading_r: f64,
        footh_l: f64,
        footh_r: f64,
    ) -> Self {
        Self { forward_l, forward_r, left_l, left_r, heading_l, heading_r, footh_l, footh_r }
    }

    pub fn from_feet(left: FootState, right: FootState) -> Self {
        Self {
            forward_l: left.forward,
            forward_r: right.forward,
            left_l: left.left,
            left_r: right.left,
            heading_l: left.heading,
            heading_r: right.heading,
            footh_l: left.height,
            footh_r: right.height,
        }
    }

    pub fn foot(&self, foot: Foot) -> FootState {
        match foot {
            Foot::Left => {
                FootState::new(self.forward_l, self.left_l, self.heading_l, self.footh_l)
            }
            Foot::Right => {
                FootState::new(self.forward_r, self.left_r, self.heading_r, self.footh_r)
            }
        }
    }

    pub fn height(&self, foot: Foot) -> f64 {
        match foot {
            Foot::Left => self.footh_l,
            Foot::Right => self.footh_r,
        }
    }

    pub fn to_vector(&self) -> FeetVector {
        FeetVector::from([
            self.forward_l,
            self.forward_r,
            self.left_l,
            self.left_r,
            self.heading_l,
            self.heading_r,
            self.footh_l,
            self.footh_r,
        ])
    }

    /// Field-wise blend `(1 - t) * self + t * other`
    pub fn lerp(&self, other: &FeetTrajectoryPoint, t: f64) -> Self {
        self.to_vector().lerp(&other.to_vector(), t).into()
    }

    /// Field-wise absolute difference
    pub fn abs_diff(&self, other: &FeetTrajectoryPoint) -> Self {
        (self.to_vector() - other.to_vector()).abs().into()
    }

    /// True when every field is within `tol` of the other point's
    pub fn approx_eq(&self, other: &FeetTrajectoryPoint, tol: f64) -> bool {
        self.abs_diff(other).to_vector().iter().all(|d| *d <= tol)
    }
}

impl From<FeetVector> for FeetTrajectoryPoint {
    fn from(v: FeetVector) -> Self {
        Self {
            forward_l: v[0],
            forward_r: v[1],
            left_l: v[2],
            left_r: v[3],
            heading_l: v[4],
            heading_r: v[5],
            footh_l: v[FOOTH_L_INDEX],
            footh_r: v[FOOTH_R_INDEX],
        }
    }
}
