use crate::domain::model::{AuditReport, Dataset, DatasetKind, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self, kind: DatasetKind) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Dataset>>;
    async fn transform(&self, data: Vec<Dataset>) -> Result<AuditReport>;
    async fn load(&self, report: AuditReport) -> Result<String>;
}
