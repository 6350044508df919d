//! Physical meter values
//!
//! Dials are told apart by how many ticks were found: more than the catalog
//! threshold selects the dense meter type, otherwise the sparse one. The
//! value is the scale-index times the per-interval value of that type.

use dialread_core::{MeterCatalog, MeterValue, Reading};

/// Convert a reading into a physical value using `catalog`.
pub fn meter_value(reading: &Reading, catalog: &MeterCatalog) -> MeterValue {
    let meter = catalog.select(reading.scale_num);
    MeterValue {
        value: reading.scale_index.map(|idx| idx * meter.scale_value),
        range: meter.range,
        unit: meter.unit.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialread_core::Measurement;

    #[test]
    fn test_dense_meter() {
        let reading = Reading {
            scale_num: 50,
            scale_index: Measurement::Value(10.0),
            ratio: Measurement::Value(0.2),
        };
        let v = meter_value(&reading, &MeterCatalog::default());
        assert_eq!(v.value, Measurement::Value(5.0));
        assert_eq!(v.range, 25.0);
        assert_eq!(v.unit, "MPa");
    }

    #[test]
    fn test_sparse_meter() {
        let reading = Reading {
            scale_num: 32,
            scale_index: Measurement::Value(16.0),
            ratio: Measurement::Value(0.5),
        };
        let v = meter_value(&reading, &MeterCatalog::default());
        assert!((v.value.value().unwrap() - 0.8).abs() < 1e-9);
        assert_eq!(v.range, 1.6);
    }

    #[test]
    fn test_undetermined_stays_undetermined() {
        let v = meter_value(&Reading::empty(), &MeterCatalog::default());
        assert_eq!(v.value, Measurement::Undetermined);
    }
}
