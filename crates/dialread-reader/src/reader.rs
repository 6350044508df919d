//! Single-crop meter reading
//!
//! [`MeterReader`] owns a validated configuration and a prebuilt polar
//! unroller, and runs the full pipeline for one label mask:
//!
//! 1. optional erosion of the mask (background wins)
//! 2. polar unrolling
//! 3. column reduction into pointer and scale signals
//! 4. mean filtering of the scale signal
//! 5. band location
//! 6. reading calculation
//!
//! A reader holds no per-crop state and is shared by reference across the
//! workers of a batch.

use crate::band::{Band, band_midpoints, pointer_band};
use crate::calc::compute_reading;
use crate::denoise::mean_filter;
use crate::error::{ReaderError, ReaderResult};
use crate::reduce::{ColumnSignals, reduce_columns};
use crate::value::meter_value;
use dialread_core::{ColumnSignal, LabelGrid, MeterValue, Reading, ReaderConfig};
use dialread_morph::erode_labels;
use dialread_transform::PolarUnroller;
use std::borrow::Cow;

/// Intermediate results of one read, for inspection
#[derive(Debug, Clone)]
pub struct ReadTrace {
    /// Unrolled strip
    pub strip: LabelGrid,
    /// Raw per-column counts
    pub signals: ColumnSignals,
    /// Scale signal after mean filtering
    pub scale_filtered: ColumnSignal,
    /// Tick band midpoints
    pub scale_locations: Vec<f64>,
    /// Pointer band, if any
    pub pointer: Option<Band>,
    /// Final reading
    pub reading: Reading,
}

/// Reads one meter crop at a time
#[derive(Debug, Clone)]
pub struct MeterReader {
    config: ReaderConfig,
    unroller: PolarUnroller,
}

impl MeterReader {
    /// Build a reader, validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Core`] for an invalid configuration (geometry
    /// that samples outside the mask, duplicate labels, zero erosion kernel).
    pub fn new(config: ReaderConfig) -> ReaderResult<Self> {
        config.validate()?;
        let unroller = PolarUnroller::new(config.geometry)?;
        Ok(Self { config, unroller })
    }

    /// Configuration in use
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read one label mask.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Transform`] if the mask is not the configured
    /// size. Missing ticks or pointer are not errors; they yield
    /// undetermined values in the [`Reading`].
    pub fn read(&self, mask: &LabelGrid) -> ReaderResult<Reading> {
        Ok(self.inspect(mask)?.reading)
    }

    /// Read one label mask and convert to a physical value.
    pub fn read_value(&self, mask: &LabelGrid) -> ReaderResult<(Reading, MeterValue)> {
        let reading = self.read(mask)?;
        let value = meter_value(&reading, &self.config.meters);
        Ok((reading, value))
    }

    /// Read one label mask, keeping every intermediate result.
    pub fn inspect(&self, mask: &LabelGrid) -> ReaderResult<ReadTrace> {
        let mask = match self.config.erode_kernel {
            Some(k) if k > 1 => Cow::Owned(erode_labels(mask, k, &self.config.labels)?),
            _ => Cow::Borrowed(mask),
        };
        let strip = self.unroller.unroll(&mask)?;
        let signals = reduce_columns(&strip, &self.config.labels);
        let (scale_filtered, scale_locations, pointer, reading) = self.locate(&signals)?;

        Ok(ReadTrace {
            strip,
            signals,
            scale_filtered,
            scale_locations,
            pointer,
            reading,
        })
    }

    /// Compute a reading from precomputed column signals.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::SignalLength`] if either signal is not the
    /// unrolled width.
    pub fn read_signals(&self, signals: &ColumnSignals) -> ReaderResult<Reading> {
        Ok(self.locate(signals)?.3)
    }

    fn locate(
        &self,
        signals: &ColumnSignals,
    ) -> ReaderResult<(ColumnSignal, Vec<f64>, Option<Band>, Reading)> {
        let expected = self.config.geometry.unrolled_width as usize;
        for signal in [&signals.scale, &signals.pointer] {
            if signal.len() != expected {
                return Err(ReaderError::SignalLength {
                    expected,
                    actual: signal.len(),
                });
            }
        }

        let mut scale = signals.scale.clone();
        if self.config.mean_filter {
            let mean = mean_filter(&mut scale);
            tracing::trace!(mean, "scale mean filter");
        }
        let scale_locations = band_midpoints(&scale);
        let pointer = pointer_band(&signals.pointer);
        let reading = compute_reading(&scale_locations, pointer.map(|b| b.midpoint()));

        tracing::trace!(
            scale_num = reading.scale_num,
            pointer = ?pointer,
            scale_index = reading.scale_index.to_sentinel(),
            ratio = reading.ratio.to_sentinel(),
            "crop read"
        );
        Ok((scale, scale_locations, pointer, reading))
    }
}
