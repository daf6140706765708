pub mod emails;
pub mod etl;
pub mod measurements;
pub mod numeric;
pub mod orders;
pub mod pipeline;

pub use crate::domain::model::{
    AuditReport, CountTally, Dataset, DatasetKind, MeanTally, Outcome, OutputFormat, Rejection,
    ReportSection,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use serde_json::Value;

/// Elements of a top-level input; anything other than an array counts as empty.
pub fn elements(input: &Value) -> &[Value] {
    match input {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}
