use crate::core::{elements, numeric::parse_number, MeanTally, Rejection};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeasurementRejection {
    Null,
    NotNumeric,
}

impl Rejection for MeasurementRejection {
    fn as_str(&self) -> &'static str {
        match self {
            MeasurementRejection::Null => "null",
            MeasurementRejection::NotNumeric => "not_numeric",
        }
    }
}

pub fn summarize_measurements(values: &Value) -> MeanTally<MeasurementRejection> {
    let mut tally = MeanTally::new();

    for (index, value) in elements(values).iter().enumerate() {
        // null 先行排除，不交給數值轉換判斷
        if value.is_null() {
            tally.reject(MeasurementRejection::Null);
            continue;
        }

        match parse_number(value) {
            Ok(measurement) => tally.accept(measurement),
            Err(e) => {
                tracing::trace!(index, error = %e, "skipping measurement");
                tally.reject(MeasurementRejection::NotNumeric);
            }
        }
    }

    tracing::debug!(
        "Measurements: {} valid, {} skipped, average {}",
        tally.accepted,
        tally.rejected_count(),
        tally.mean()
    );
    tally
}

/// Mean of every value that converts to a number; `0.0` when none do.
pub fn average_valid_measurements(values: &Value) -> f64 {
    summarize_measurements(values).mean()
}
