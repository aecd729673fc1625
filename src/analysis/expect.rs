//! Checking measured angle classes against known design values.

use crate::errors::ValidationError;
use crate::float_types::{Real, to_degrees, to_radians};
use crate::quantize::QuantizedHistogram;

/// Design angles that every measured class must match.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleExpectation {
    /// Accepted angles in radians.
    pub targets: Vec<Real>,
    /// Maximum distance in radians between a class and its nearest target.
    pub tolerance: Real,
}

impl AngleExpectation {
    pub const fn new(targets: Vec<Real>, tolerance: Real) -> Self {
        AngleExpectation { targets, tolerance }
    }

    /// Targets given in degrees, tolerance in radians.
    pub fn from_degrees(targets: &[Real], tolerance: Real) -> Self {
        Self::new(targets.iter().copied().map(to_radians).collect(), tolerance)
    }

    fn matches(&self, angle: Real) -> bool {
        self.targets
            .iter()
            .any(|target| (angle - target).abs() < self.tolerance)
    }

    /// Every class value of `histogram` must be close to some target.
    pub fn check<T: Ord>(&self, label: &str, histogram: &QuantizedHistogram<T>) -> Result<(), ValidationError> {
        match histogram.values().find(|&angle| !self.matches(angle)) {
            Some(angle) => {
                let targets: Vec<String> = self
                    .targets
                    .iter()
                    .map(|&target| format!("{:.2}°", to_degrees(target)))
                    .collect();
                Err(ValidationError::InvariantViolation(format!(
                    "{label} angle {:.2}° is not within {} rad of [{}]",
                    to_degrees(angle),
                    self.tolerance,
                    targets.join(", ")
                )))
            },
            None => Ok(()),
        }
    }
}

/// A summed angle (e.g. the full turn around a hub) must be close to `target`.
pub fn check_total(label: &str, total: Real, target: Real, tolerance: Real) -> Result<(), ValidationError> {
    if (total - target).abs() < tolerance {
        Ok(())
    } else {
        Err(ValidationError::InvariantViolation(format!(
            "{label} {:.2}° differs from {:.2}° by more than {tolerance} rad",
            to_degrees(total),
            to_degrees(target)
        )))
    }
}
