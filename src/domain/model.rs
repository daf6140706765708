use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 單一元素被排除的原因，提供穩定的 snake_case 代碼
pub trait Rejection: Copy + Ord + fmt::Debug {
    fn as_str(&self) -> &'static str;
}

/// 平均值累加器：總和、有效筆數、依原因分類的排除筆數
#[derive(Debug, Clone, PartialEq)]
pub struct MeanTally<R: Rejection> {
    pub total: f64,
    pub accepted: usize,
    pub rejected: BTreeMap<R, usize>,
}

impl<R: Rejection> MeanTally<R> {
    pub fn new() -> Self {
        Self {
            total: 0.0,
            accepted: 0,
            rejected: BTreeMap::new(),
        }
    }

    pub fn accept(&mut self, value: f64) {
        self.total += value;
        self.accepted += 1;
    }

    pub fn reject(&mut self, reason: R) {
        *self.rejected.entry(reason).or_insert(0) += 1;
    }

    /// Arithmetic mean of accepted values; exactly `0.0` when nothing was accepted.
    pub fn mean(&self) -> f64 {
        if self.accepted == 0 {
            0.0
        } else {
            self.total / self.accepted as f64
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn rejected_by_reason(&self) -> BTreeMap<String, usize> {
        reason_map(&self.rejected)
    }
}

impl<R: Rejection> Default for MeanTally<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTally<R: Rejection> {
    pub accepted: usize,
    pub rejected: BTreeMap<R, usize>,
}

impl<R: Rejection> CountTally<R> {
    pub fn new() -> Self {
        Self {
            accepted: 0,
            rejected: BTreeMap::new(),
        }
    }

    pub fn accept(&mut self) {
        self.accepted += 1;
    }

    pub fn reject(&mut self, reason: R) {
        *self.rejected.entry(reason).or_insert(0) += 1;
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn rejected_by_reason(&self) -> BTreeMap<String, usize> {
        reason_map(&self.rejected)
    }
}

impl<R: Rejection> Default for CountTally<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn reason_map<R: Rejection>(rejected: &BTreeMap<R, usize>) -> BTreeMap<String, usize> {
    rejected
        .iter()
        .map(|(reason, count)| (reason.as_str().to_string(), *count))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Orders,
    Emails,
    Measurements,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Orders,
        DatasetKind::Emails,
        DatasetKind::Measurements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Orders => "orders",
            DatasetKind::Emails => "emails",
            DatasetKind::Measurements => "measurements",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 從儲存讀入、尚未處理的原始資料集
#[derive(Debug, Clone)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub source: String,
    pub input: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Mean(f64),
    Count(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Mean(value) => write!(f, "{}", value),
            Outcome::Count(count) => write!(f, "{}", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub dataset: DatasetKind,
    pub source: String,
    pub result: Outcome,
    pub accepted: usize,
    pub rejected: usize,
    pub rejections: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ReportSection>,
}

impl AuditReport {
    pub fn section(&self, kind: DatasetKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.dataset == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "audit_report.json",
            OutputFormat::Csv => "audit_report.csv",
        }
    }
}
