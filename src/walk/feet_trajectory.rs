//! Feet trajectory generation for one walking step.
//!
//! Every field of both feet is blended from `last` to `next` with a
//! half-cosine ease, `s' = 0.5 * (1 - cos(pi * s))`, which has zero slope at
//! both ends of the step so consecutive steps join without a velocity jump.
//! The swing foot additionally gets `foot_lift_amplitude * sin(pi * s)` added
//! to its height.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::common::{FeetTrajectoryPoint, FeetVector, Foot, Phase, WalkResult};
use crate::common::{FOOTH_L_INDEX, FOOTH_R_INDEX};
use crate::walk::params::Params;

/// Half-cosine ease of the normalized progress `s` in [0, 1]
pub fn half_cosine(s: f64) -> f64 {
    if s <= 0.0 {
        0.0
    } else if s >= 1.0 {
        1.0
    } else {
        0.5 * (1.0 - (PI * s).cos())
    }
}

/// Unit lift profile, exactly zero outside the open interval (0, 1)
pub fn lift_profile(s: f64) -> f64 {
    if s <= 0.0 || s >= 1.0 {
        0.0
    } else {
        (PI * s).sin()
    }
}

fn height_index(foot: Foot) -> usize {
    match foot {
        Foot::Left => FOOTH_L_INDEX,
        Foot::Right => FOOTH_R_INDEX,
    }
}

/// Lazily sampled trajectory of one step.
///
/// Yields `floor(period / dt) + 1` points at `t_i = i * dt`. The first point
/// equals `last`; the final point equals `next` only when `period` is a
/// multiple of `dt`.
#[derive(Debug, Clone)]
pub struct FeetTrajectory {
    params: Params,
    phase: Phase,
    last: FeetVector,
    next: FeetVector,
    num_samples: usize,
    ends_on_period: bool,
    index: usize,
}

impl FeetTrajectory {
    pub fn new(
        params: &Params,
        phase: Phase,
        last: &FeetTrajectoryPoint,
        next: &FeetTrajectoryPoint,
    ) -> WalkResult<Self> {
        if let Err(e) = params.validate() {
            debug!("[FeetTrajectory] rejected {:?}: {}", params, e);
            return Err(e);
        }

        let num_samples = params.num_samples();
        debug!(
            "[FeetTrajectory] {:?}: {} samples, period={:.3} dt={:.3} lift={:.4}",
            phase, num_samples, params.period, params.dt, params.foot_lift_amplitude
        );

        Ok(Self {
            params: *params,
            phase,
            last: last.to_vector(),
            next: next.to_vector(),
            num_samples,
            ends_on_period: params.ends_on_period(),
            index: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Total number of samples in the step, independent of iteration
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Normalized progress of sample `i`
    fn progress(&self, i: usize) -> f64 {
        if self.ends_on_period && i + 1 == self.num_samples {
            return 1.0;
        }
        (i as f64 * self.params.dt / self.params.period).min(1.0)
    }

    fn point_at_progress(&self, s: f64) -> FeetTrajectoryPoint {
        let mut v = self.last.lerp(&self.next, half_cosine(s));
        v[height_index(self.phase.swing_foot())] +=
            self.params.foot_lift_amplitude * lift_profile(s);
        v.into()
    }

    /// Sample `i` of the step, `None` past the end
    pub fn sample(&self, i: usize) -> Option<FeetTrajectoryPoint> {
        if i >= self.num_samples {
            return None;
        }
        Some(self.point_at_progress(self.progress(i)))
    }

    /// State at an arbitrary elapsed time, clamped to [0, period]
    pub fn at(&self, elapsed: f64) -> FeetTrajectoryPoint {
        let s = (elapsed / self.params.period).max(0.0).min(1.0);
        self.point_at_progress(s)
    }
}

impl Iterator for FeetTrajectory {
    type Item = FeetTrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.sample(self.index)?;
        trace!("[FeetTrajectory] sample {}/{}: {:?}", self.index, self.num_samples, point);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_samples.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FeetTrajectory {}

impl FusedIterator for FeetTrajectory {}

/// Generate the feet trajectory of one step from `last` to `next`
pub fn generate(
    params: &Params,
    phase: Phase,
    last: &FeetTrajectoryPoint,
    next: &FeetTrajectoryPoint,
) -> WalkResult<Vec<FeetTrajectoryPoint>> {
    Ok(FeetTrajectory::new(params, phase, last, next)?.collect())
}

/// Generate consecutive steps through `targets`, alternating the swing foot.
///
/// The first step starts at `start` with `first_phase`. Each step keeps all
/// of its samples, so a seam point closes one step and opens the next.
pub fn generate_steps(
    params: &Params,
    first_phase: Phase,
    start: &FeetTrajectoryPoint,
    targets: &[FeetTrajectoryPoint],
) -> WalkResult<Vec<FeetTrajectoryPoint>> {
    params.validate()?;

    let mut points = Vec::with_capacity(targets.len().saturating_mul(params.num_samples()));
    let mut last = *start;
    let mut phase = first_phase;
    for target in targets {
        points.extend(FeetTrajectory::new(params, phase, &last, target)?);
        last = *target;
        phase = phase.next();
    }
    debug!("[FeetTrajectory] chained {} steps into {} samples", targets.len(), points.len());

    Ok(points)
}
