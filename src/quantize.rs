//! Quantization of lengths and angles into discrete classes.
//!
//! Measurements that should be equal (all the short struts of a dome, all the
//! angles around a pentagonal hub) come out of floating point arithmetic
//! differing in the last few bits. Truncating them onto a fixed grid turns
//! them into keys that can be grouped.

use crate::errors::ValidationError;
use crate::float_types::{DEFAULT_RESOLUTION, GRID_SNAP, Real};
use std::collections::{BTreeMap, BTreeSet};

/// Largest cell index magnitude; quotients at or past it do not fit an `i64`.
const MAX_STEPS: Real = i64::MAX as Real;

/// Truncate `x` toward zero onto a grid of spacing `resolution`.
///
/// ```
/// use geodome::quantize::limit_resolution;
/// assert!((limit_resolution(1.366_38, 1e-4).unwrap() - 1.3663).abs() < 1e-12);
/// assert!((limit_resolution(-0.276_79, 1e-4).unwrap() + 0.2767).abs() < 1e-12);
/// assert!(limit_resolution(1.0, 1e-20).is_err());
/// ```
pub fn limit_resolution(x: Real, resolution: Real) -> Result<Real, ValidationError> {
    Quantizer::new(resolution)?.quantize(x)
}

/// A fixed quantization grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    resolution: Real,
}

impl Default for Quantizer {
    fn default() -> Self {
        Quantizer {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl Quantizer {
    /// Create a quantizer, rejecting non-finite or non-positive spacings.
    pub fn new(resolution: Real) -> Result<Self, ValidationError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ValidationError::InvalidResolution(resolution));
        }
        Ok(Quantizer { resolution })
    }

    pub const fn resolution(&self) -> Real {
        self.resolution
    }

    /// Index of the grid cell holding `x`, truncated toward zero.
    ///
    /// A quotient within [`GRID_SNAP`] (relative) of a grid line is taken to
    /// lie on it, so re-quantizing a quantized value never drops it into the
    /// cell below. Non-finite values, and values too large for the grid to
    /// index, are rejected rather than saturated into a shared cell.
    pub fn key(&self, x: Real) -> Result<i64, ValidationError> {
        let steps = x / self.resolution;
        let nearest = steps.round();
        let snapped = if (steps - nearest).abs() <= GRID_SNAP * nearest.abs().max(1.0) {
            nearest
        } else {
            steps.trunc()
        };
        if snapped.is_nan() || snapped.abs() >= MAX_STEPS {
            return Err(ValidationError::Unquantizable {
                value: x,
                resolution: self.resolution,
            });
        }
        Ok(snapped as i64)
    }

    /// Grid value of a cell index.
    pub fn value(&self, key: i64) -> Real {
        key as Real * self.resolution
    }

    /// `value(key(x))`
    pub fn quantize(&self, x: Real) -> Result<Real, ValidationError> {
        Ok(self.value(self.key(x)?))
    }
}

/// Items grouped by a quantized measurement, in increasing measurement order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedHistogram<T> {
    quantizer: Quantizer,
    classes: BTreeMap<i64, BTreeSet<T>>,
}

impl<T: Ord> QuantizedHistogram<T> {
    pub const fn new(quantizer: Quantizer) -> Self {
        QuantizedHistogram {
            quantizer,
            classes: BTreeMap::new(),
        }
    }

    pub const fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// File `item` under the class of `measurement`, returning the class value.
    pub fn insert(&mut self, measurement: Real, item: T) -> Result<Real, ValidationError> {
        let key = self.quantizer.key(measurement)?;
        self.classes.entry(key).or_default().insert(item);
        Ok(self.quantizer.value(key))
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of items over all classes.
    pub fn item_count(&self) -> usize {
        self.classes.values().map(BTreeSet::len).sum()
    }

    /// `(class value, items)` pairs, smallest value first.
    pub fn iter(&self) -> impl Iterator<Item = (Real, &BTreeSet<T>)> + '_ {
        self.classes
            .iter()
            .map(|(&key, items)| (self.quantizer.value(key), items))
    }

    /// Class values, smallest first.
    pub fn values(&self) -> impl Iterator<Item = Real> + '_ {
        self.classes.keys().map(|&key| self.quantizer.value(key))
    }

    /// Items in the class that `measurement` falls into.
    pub fn get(&self, measurement: Real) -> Option<&BTreeSet<T>> {
        let key = self.quantizer.key(measurement).ok()?;
        self.classes.get(&key)
    }

    /// Sum of class value times class size.
    pub fn weighted_total(&self) -> Real {
        self.iter()
            .map(|(value, items)| value * items.len() as Real)
            .sum()
    }
}
