use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct AuditEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AuditEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting audit process...");

        // Extract
        let datasets = self.pipeline.extract().await?;
        tracing::info!("Extracted {} datasets", datasets.len());

        // Transform
        let report = self.pipeline.transform(datasets).await?;
        for section in &report.sections {
            tracing::info!(
                "📊 {} ({}): result {}, {} valid, {} skipped",
                section.dataset,
                section.source,
                section.result,
                section.accepted,
                section.rejected
            );
        }

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!(
            "Report saved to: {} (took {:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
