//! Step timing parameters.
//!
//! Parameters are supplied fresh for every generated step. They can be built
//! in code or loaded from a YAML document such as `configs/walk.yaml`:
//!
//! ```yaml
//! foot_lift_amplitude: 0.012  # [m]
//! period: 0.3                 # [s]
//! dt: 0.01                    # [s]
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::{WalkError, WalkResult};

/// Relative tolerance used when flooring `period / dt`
pub const SAMPLE_EPSILON: f64 = 1e-9;

/// Upper bound on the number of samples in one step
pub const MAX_SAMPLES: usize = 10_000_000;

/// Step timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Peak vertical lift of the swing foot [m]
    pub foot_lift_amplitude: f64,
    /// Step duration [s]
    pub period: f64,
    /// Sampling interval [s]
    pub dt: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            foot_lift_amplitude: 0.012,
            period: 0.3,
            dt: 0.01,
        }
    }
}

impl Params {
    pub fn new(foot_lift_amplitude: f64, period: f64, dt: f64) -> Self {
        Self { foot_lift_amplitude, period, dt }
    }

    pub fn with_foot_lift_amplitude(mut self, amplitude: f64) -> Self {
        self.foot_lift_amplitude = amplitude;
        self
    }

    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Reject configurations that cannot be sampled
    pub fn validate(&self) -> WalkResult<()> {
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(WalkError::InvalidParameter(format!(
                "period must be positive and finite, got {}",
                self.period
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(WalkError::InvalidParameter(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.foot_lift_amplitude.is_finite() && self.foot_lift_amplitude >= 0.0) {
            return Err(WalkError::InvalidParameter(format!(
                "foot_lift_amplitude must be non-negative and finite, got {}",
                self.foot_lift_amplitude
            )));
        }
        let ratio = self.period / self.dt;
        if !(ratio < (MAX_SAMPLES - 1) as f64) {
            return Err(WalkError::InvalidParameter(format!(
                "period / dt = {} exceeds the {} sample limit",
                ratio, MAX_SAMPLES
            )));
        }
        Ok(())
    }

    /// Number of whole `dt` intervals that fit in `period`, capped at `MAX_SAMPLES - 1`
    pub(crate) fn num_intervals(&self) -> usize {
        let ratio = self.period / self.dt;
        if !(ratio > 0.0) {
            return 0;
        }
        let floored = (ratio + ratio.max(1.0) * SAMPLE_EPSILON).floor();
        floored.min((MAX_SAMPLES - 1) as f64) as usize
    }

    /// True when `period` is a multiple of `dt`
    pub(crate) fn ends_on_period(&self) -> bool {
        let end = self.num_intervals() as f64 * self.dt;
        (self.period - end).abs() <= self.period * SAMPLE_EPSILON
    }

    /// Number of samples in one step, `floor(period / dt) + 1`.
    ///
    /// The quotient is floored with a relative tolerance of `SAMPLE_EPSILON`,
    /// so a `period` within that tolerance below a multiple of `dt` counts the
    /// multiple: e.g. `period = 1.0 - 1e-12, dt = 0.1` gives 11 samples and
    /// the last one lies a hair past `period` (its progress is clamped to 1).
    ///
    /// Only meaningful for validated parameters; otherwise the count is
    /// clamped to `1..=MAX_SAMPLES`.
    pub fn num_samples(&self) -> usize {
        self.num_intervals().saturating_add(1)
    }

    /// Parse from a YAML string; missing keys take their defaults
    pub fn from_yaml(yaml: &str) -> WalkResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| WalkError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> WalkResult<String> {
        serde_yaml::to_string(self).map_err(|e| WalkError::Config(e.to_string()))
    }

    /// Load from a YAML file
    pub fn load(path: &Path) -> WalkResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params = Self::from_yaml(&contents)?;
        debug!("[Params] loaded {:?} from {}", params, path.display());
        Ok(params)
    }

    /// Load from `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: &Path) -> WalkResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("[Params] {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = Params::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.num_samples(), 31);
    }

    #[test]
    fn test_num_samples_tolerates_rounding() {
        // 0.3 / 0.01 evaluates to 29.999999999999996
        assert_eq!(Params::new(0.0, 0.3, 0.01).num_samples(), 31);
        assert_eq!(Params::new(0.0, 0.3, 0.5).num_samples(), 1);
        assert_eq!(Params::new(0.0, 0.25, 0.1).num_samples(), 3);
        assert_eq!(Params::new(0.0, 1.0, 0.001).num_samples(), 1001);
    }

    #[test]
    fn test_ends_on_period() {
        assert!(Params::new(0.0, 0.3, 0.01).ends_on_period());
        assert!(!Params::new(0.0, 0.25, 0.1).ends_on_period());
        assert!(!Params::new(0.0, 0.3, 0.5).ends_on_period());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            Params::new(0.01, -1.0, 0.01),
            Params::new(0.01, 0.0, 0.01),
            Params::new(0.01, 0.3, 0.0),
            Params::new(0.01, 0.3, -0.01),
            Params::new(-0.1, 0.3, 0.01),
            Params::new(0.01, f64::NAN, 0.01),
            Params::new(0.01, 0.3, f64::INFINITY),
            Params::new(f64::NAN, 0.3, 0.01),
        ];
        for params in bad.iter() {
            assert!(
                matches!(params.validate(), Err(WalkError::InvalidParameter(_))),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn test_rejects_unrepresentable_sample_count() {
        let params = Params::new(0.0, 1.0, 1e-300);
        assert!(matches!(params.validate(), Err(WalkError::InvalidParameter(_))));
        assert_eq!(params.num_samples(), MAX_SAMPLES);

        let params = Params::new(0.0, 1.0, 1.0 / MAX_SAMPLES as f64);
        assert!(matches!(params.validate(), Err(WalkError::InvalidParameter(_))));

        assert!(Params::new(0.0, 1.0, 1e-6).validate().is_ok());
    }

    #[test]
    fn test_num_samples_on_unvalidated_params() {
        assert_eq!(Params::new(0.0, 0.3, 0.0).num_samples(), MAX_SAMPLES);
        assert_eq!(Params::new(0.0, -1.0, 0.01).num_samples(), 1);
        assert_eq!(Params::new(0.0, f64::NAN, 0.01).num_samples(), 1);
    }

    #[test]
    fn test_num_samples_near_multiple() {
        let params = Params::new(0.0, 1.0 - 1e-12, 0.1);
        assert_eq!(params.num_samples(), 11);
        assert!(params.ends_on_period());
    }

    #[test]
    fn test_builder() {
        let params = Params::default()
            .with_foot_lift_amplitude(0.02)
            .with_period(0.5)
            .with_dt(0.02);
        assert_eq!(params, Params::new(0.02, 0.5, 0.02));
    }

    #[test]
    fn test_from_yaml_fills_defaults() {
        let params = Params::from_yaml("period: 0.4\n").unwrap();
        assert_eq!(params.period, 0.4);
        assert_eq!(params.dt, Params::default().dt);
        assert_eq!(params.foot_lift_amplitude, Params::default().foot_lift_amplitude);
    }

    #[test]
    fn test_yaml_round_trip() {
        let params = Params::new(0.015, 0.4, 0.02);
        let yaml = params.to_yaml().unwrap();
        assert_eq!(Params::from_yaml(&yaml).unwrap(), params);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Params::from_yaml("period: [not, a, number]");
        assert!(matches!(result, Err(WalkError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let params = Params::load_or_default(Path::new("does/not/exist.yaml")).unwrap();
        assert_eq!(params, Params::default());
    }
}
