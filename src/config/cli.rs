use crate::core::{ConfigProvider, DatasetKind, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_input_file, validate_non_empty, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-audit")]
#[command(about = "Validate and aggregate order, email and measurement datasets")]
pub struct CliConfig {
    /// JSON array of order records
    #[arg(long)]
    pub orders: Option<String>,

    /// JSON array of email candidates
    #[arg(long)]
    pub emails: Option<String>,

    /// JSON array of measurements
    #[arg(long)]
    pub measurements: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long = "format", value_enum, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self, kind: DatasetKind) -> Option<&str> {
        match kind {
            DatasetKind::Orders => self.orders.as_deref(),
            DatasetKind::Emails => self.emails.as_deref(),
            DatasetKind::Measurements => self.measurements.as_deref(),
        }
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let inputs: Vec<(DatasetKind, &str)> = DatasetKind::ALL
            .into_iter()
            .filter_map(|kind| self.input_file(kind).map(|path| (kind, path)))
            .collect();

        validate_non_empty("--orders/--emails/--measurements", &inputs)?;
        for (kind, path) in inputs {
            validate_input_file(&format!("--{}", kind), path)?;
        }

        validate_path("--output-path", &self.output_path)?;
        validate_non_empty("--format", &self.formats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::try_parse_from([
            "small-audit",
            "--orders",
            "orders.json",
            "--emails",
            "emails.json",
            "--format",
            "json,csv",
        ])
        .unwrap();

        assert_eq!(config.input_file(DatasetKind::Orders), Some("orders.json"));
        assert_eq!(config.input_file(DatasetKind::Measurements), None);
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.formats, vec![OutputFormat::Json, OutputFormat::Csv]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_to_json_output() {
        let config = CliConfig::try_parse_from(["small-audit", "--measurements", "m.json"]).unwrap();
        assert_eq!(config.formats, vec![OutputFormat::Json]);
    }

    #[test]
    fn test_requires_at_least_one_input() {
        let config = CliConfig::try_parse_from(["small-audit"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_json_input() {
        let config = CliConfig::try_parse_from(["small-audit", "--emails", "emails.txt"]).unwrap();
        assert!(config.validate().is_err());
    }
}
