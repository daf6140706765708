use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 重試錯誤
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl AuditError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuditError::IoError(_) => ErrorCategory::Io,
            AuditError::SerializationError(_) | AuditError::CsvError(_) => ErrorCategory::Data,
            AuditError::ConfigError { .. }
            | AuditError::ConfigValidationError { .. }
            | AuditError::InvalidConfigValueError { .. }
            | AuditError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AuditError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // IO 錯誤可重試
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AuditError::IoError(_) => "Check that the input files exist and the output directory is writable",
            AuditError::SerializationError(_) => "Make sure every input file contains valid JSON",
            AuditError::CsvError(_) => "Check the output directory and retry the CSV export",
            AuditError::ConfigError { .. } | AuditError::ConfigValidationError { .. } => {
                "Review the configuration file syntax"
            }
            AuditError::InvalidConfigValueError { .. } => "Fix the highlighted configuration value",
            AuditError::MissingConfigError { .. } => "Provide the missing configuration value",
            AuditError::ProcessingError { .. } => "Re-run with --verbose to see which dataset failed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AuditError::IoError(e) => format!("無法讀寫檔案: {}", e),
            AuditError::SerializationError(e) => format!("輸入資料不是有效的 JSON: {}", e),
            AuditError::CsvError(e) => format!("CSV 報表輸出失敗: {}", e),
            AuditError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置 '{}' 無效: {}", field, reason)
            }
            AuditError::MissingConfigError { field } => format!("缺少必要配置: {}", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
