use crate::core::emails::summarize_emails;
use crate::core::measurements::summarize_measurements;
use crate::core::orders::summarize_orders;
use crate::core::{
    AuditReport, ConfigProvider, Dataset, DatasetKind, Outcome, OutputFormat, Pipeline,
    ReportSection, Storage,
};
use crate::utils::error::{AuditError, Result};
use serde::Serialize;

pub struct AuditPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AuditPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, format: OutputFormat) -> String {
        format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            format.file_name()
        )
    }
}

/// 依資料集類型執行對應的驗證與彙總
pub fn audit_dataset(dataset: &Dataset) -> ReportSection {
    let (result, accepted, rejected, rejections) = match dataset.kind {
        DatasetKind::Orders => {
            let tally = summarize_orders(&dataset.input);
            (
                Outcome::Mean(tally.mean()),
                tally.accepted,
                tally.rejected_count(),
                tally.rejected_by_reason(),
            )
        }
        DatasetKind::Emails => {
            let tally = summarize_emails(&dataset.input);
            (
                Outcome::Count(tally.accepted),
                tally.accepted,
                tally.rejected_count(),
                tally.rejected_by_reason(),
            )
        }
        DatasetKind::Measurements => {
            let tally = summarize_measurements(&dataset.input);
            (
                Outcome::Mean(tally.mean()),
                tally.accepted,
                tally.rejected_count(),
                tally.rejected_by_reason(),
            )
        }
    };

    ReportSection {
        dataset: dataset.kind,
        source: dataset.source.clone(),
        result,
        accepted,
        rejected,
        rejections,
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    dataset: &'a str,
    source: &'a str,
    result: String,
    accepted: usize,
    rejected: usize,
}

fn render_csv(report: &AuditReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for section in &report.sections {
        writer.serialize(CsvRow {
            dataset: section.dataset.as_str(),
            source: &section.source,
            result: section.result.to_string(),
            accepted: section.accepted,
            rejected: section.rejected,
        })?;
    }

    writer.into_inner().map_err(|e| AuditError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AuditPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Dataset>> {
        let mut datasets = Vec::new();

        for kind in DatasetKind::ALL {
            let Some(path) = self.config.input_file(kind) else {
                continue;
            };

            tracing::debug!("Reading {} from: {}", kind, path);
            let bytes = self.storage.read_file(path).await?;
            let input: serde_json::Value = serde_json::from_slice(&bytes)?;

            // 頂層不是陣列時視為零筆資料
            if !input.is_array() {
                tracing::warn!("⚠️ {} input '{}' is not a JSON array, treating as empty", kind, path);
            }

            datasets.push(Dataset {
                kind,
                source: path.to_string(),
                input,
            });
        }

        if datasets.is_empty() {
            tracing::warn!("No input files configured");
        }

        Ok(datasets)
    }

    async fn transform(&self, data: Vec<Dataset>) -> Result<AuditReport> {
        let sections = data.iter().map(audit_dataset).collect();

        Ok(AuditReport {
            generated_at: chrono::Utc::now(),
            sections,
        })
    }

    async fn load(&self, report: AuditReport) -> Result<String> {
        let formats = self.config.output_formats();
        if formats.is_empty() {
            return Err(AuditError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }

        for format in formats {
            let data = match format {
                OutputFormat::Json => serde_json::to_vec_pretty(&report)?,
                OutputFormat::Csv => render_csv(&report)?,
            };

            let path = self.output_file(*format);
            tracing::debug!("Writing {} bytes to {}", data.len(), path);
            self.storage.write_file(&path, &data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
