//! Reading results
//!
//! A [`Reading`] is the per-crop output of the pipeline. Quantities that
//! cannot be determined from the mask (no ticks, no pointer, pointer outside
//! every tick interval) are [`Measurement::Undetermined`] rather than a
//! magic number.

use serde::{Deserialize, Serialize};

/// Value reported for "undetermined" by [`Measurement::to_sentinel`]
pub const UNDETERMINED_SENTINEL: f64 = -1.0;

/// A numeric reading that may be undetermined
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// A computed value
    Value(f64),
    /// Not enough signal to compute the value
    #[default]
    Undetermined,
}

impl Measurement {
    /// Get the value, if determined.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(v),
            Measurement::Undetermined => None,
        }
    }

    /// Check whether a value was computed.
    #[inline]
    pub fn is_determined(self) -> bool {
        matches!(self, Measurement::Value(_))
    }

    /// Flatten to a plain number, using -1 for undetermined.
    pub fn to_sentinel(self) -> f64 {
        self.value().unwrap_or(UNDETERMINED_SENTINEL)
    }

    /// Apply `f` to a determined value.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Measurement {
        match self {
            Measurement::Value(v) => Measurement::Value(f(v)),
            Measurement::Undetermined => Measurement::Undetermined,
        }
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Measurement::Undetermined, Measurement::Value)
    }
}

/// Reading of one meter crop
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reading {
    /// Number of scale bands (ticks) detected
    pub scale_num: usize,
    /// Fractional tick position the pointer indicates
    pub scale_index: Measurement,
    /// Pointer position between the first and last tick
    pub ratio: Measurement,
}

impl Reading {
    /// A reading with no detected ticks.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Physical meter value derived from a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterValue {
    /// Scale-index multiplied by the meter's per-interval value
    pub value: Measurement,
    /// Full-scale range of the selected meter type
    pub range: f64,
    /// Unit of `value`
    pub unit: String,
}
