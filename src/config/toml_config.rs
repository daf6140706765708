use crate::core::{ConfigProvider, DatasetKind, OutputFormat};
use crate::utils::error::{AuditError, Result};
use crate::utils::validation::{
    validate_input_file, validate_non_empty, validate_one_of, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub orders: Option<String>,
    pub emails: Option<String>,
    pub measurements: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AuditError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AuditError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or("info")
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .map(|logging| logging.format)
            .unwrap_or_default()
    }

    pub fn configured_inputs(&self) -> Vec<(DatasetKind, &str)> {
        DatasetKind::ALL
            .into_iter()
            .filter_map(|kind| self.input_file(kind).map(|path| (kind, path)))
            .collect()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self, kind: DatasetKind) -> Option<&str> {
        match kind {
            DatasetKind::Orders => self.inputs.orders.as_deref(),
            DatasetKind::Emails => self.inputs.emails.as_deref(),
            DatasetKind::Measurements => self.inputs.measurements.as_deref(),
        }
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let inputs = self.configured_inputs();
        validate_non_empty("inputs", &inputs)?;
        for (kind, path) in inputs {
            validate_input_file(&format!("inputs.{}", kind), path)?;
        }

        validate_path("output.path", &self.output.path)?;
        validate_non_empty("output.formats", &self.output.formats)?;
        validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[job]
name = "nightly-audit"
description = "Nightly data quality audit"

[inputs]
orders = "data/orders.json"
measurements = "data/measurements.json"

[output]
path = "./audit-output"
formats = ["json", "csv"]

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job.name, "nightly-audit");
        assert_eq!(config.input_file(DatasetKind::Orders), Some("data/orders.json"));
        assert_eq!(config.input_file(DatasetKind::Emails), None);
        assert_eq!(
            config.output_formats(),
            &[OutputFormat::Json, OutputFormat::Csv]
        );
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_are_omitted() {
        let toml_content = r#"
[job]
name = "minimal"

[inputs]
emails = "emails.json"

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_formats(), &[OutputFormat::Json]);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.configured_inputs(), vec![(DatasetKind::Emails, "emails.json")]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_AUDIT_TEST_DATA_DIR", "/srv/data");

        let toml_content = r#"
[job]
name = "env"

[inputs]
orders = "${SMALL_AUDIT_TEST_DATA_DIR}/orders.json"
emails = "${SMALL_AUDIT_TEST_UNSET_VAR}/emails.json"

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inputs.orders.as_deref(), Some("/srv/data/orders.json"));
        assert_eq!(
            config.inputs.emails.as_deref(),
            Some("${SMALL_AUDIT_TEST_UNSET_VAR}/emails.json")
        );

        std::env::remove_var("SMALL_AUDIT_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let no_inputs = r#"
[job]
name = "empty"

[inputs]

[output]
path = "./output"
"#;
        let config = TomlConfig::from_toml_str(no_inputs).unwrap();
        assert!(matches!(
            config.validate(),
            Err(AuditError::MissingConfigError { .. })
        ));

        let wrong_extension = r#"
[job]
name = "csv"

[inputs]
orders = "orders.csv"

[output]
path = "./output"
"#;
        let config = TomlConfig::from_toml_str(wrong_extension).unwrap();
        assert!(config.validate().is_err());

        let bad_level = r#"
[job]
name = "loud"

[inputs]
orders = "orders.json"

[output]
path = "./output"

[logging]
level = "verbose"
"#;
        let config = TomlConfig::from_toml_str(bad_level).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_output_format_fails_to_parse() {
        let toml_content = r#"
[job]
name = "xml"

[inputs]
orders = "orders.json"

[output]
path = "./output"
formats = ["xml"]
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, AuditError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"

[inputs]
measurements = "readings.json"

[output]
path = "./output"
formats = ["csv"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "file-test");
        assert_eq!(config.output_formats(), &[OutputFormat::Csv]);
    }
}
