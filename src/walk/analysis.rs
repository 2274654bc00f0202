//! Measurements over generated trajectories

use itertools::Itertools;

use crate::common::{FeetTrajectoryPoint, FeetVector, Foot};

/// Field-wise maximum absolute change between consecutive samples.
///
/// Returns all zeros when there are fewer than two points.
pub fn max_consecutive_delta(points: &[FeetTrajectoryPoint]) -> FeetTrajectoryPoint {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.abs_diff(b).to_vector())
        .fold(FeetVector::zeros(), |acc, d| acc.sup(&d))
        .into()
}

/// Largest height of `foot` above `baseline` over paired samples
pub fn peak_lift(
    points: &[FeetTrajectoryPoint],
    baseline: &[FeetTrajectoryPoint],
    foot: Foot,
) -> f64 {
    points
        .iter()
        .zip(baseline.iter())
        .map(|(p, b)| p.height(foot) - b.height(foot))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_consecutive_delta() {
        let a = FeetTrajectoryPoint::default();
        let mut b = a;
        b.forward_l = 0.01;
        b.heading_r = -0.2;
        let mut c = b;
        c.forward_l = 0.04;
        c.heading_r = -0.25;

        let delta = max_consecutive_delta(&[a, b, c]);
        assert!((delta.forward_l - 0.03).abs() < 1e-12);
        assert!((delta.heading_r - 0.2).abs() < 1e-12);
        assert_eq!(delta.left_l, 0.0);
    }

    #[test]
    fn test_max_consecutive_delta_short_input() {
        assert_eq!(max_consecutive_delta(&[]), FeetTrajectoryPoint::default());
        let single = [FeetTrajectoryPoint::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0)];
        assert_eq!(max_consecutive_delta(&single), FeetTrajectoryPoint::default());
    }

    #[test]
    fn test_peak_lift() {
        let base = vec![FeetTrajectoryPoint::default(); 3];
        let mut lifted = base.clone();
        lifted[1].footh_l = 0.012;
        lifted[2].footh_r = 0.003;
        assert!((peak_lift(&lifted, &base, Foot::Left) - 0.012).abs() < 1e-12);
        assert!((peak_lift(&lifted, &base, Foot::Right) - 0.003).abs() < 1e-12);
        assert_eq!(peak_lift(&base, &base, Foot::Left), 0.0);
    }
}
