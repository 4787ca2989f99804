use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevError {
    #[error("Failed to start `{program}`: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Output of `{program}` could not be decoded: {message}")]
    OutputDecodeError { program: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Process,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DevError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DevError::ConfigError { .. } | DevError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DevError::SpawnError { .. } | DevError::OutputDecodeError { .. } => {
                ErrorCategory::Process
            }
            DevError::IoError(_) => ErrorCategory::FileSystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DevError::OutputDecodeError { .. } => ErrorSeverity::Medium,
            DevError::ConfigError { .. } | DevError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DevError::SpawnError { .. } | DevError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的下一步建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            DevError::SpawnError { program, .. } => format!(
                "Make sure `{}` exists; run `dev b` first if the virtual environment is missing",
                program
            ),
            DevError::IoError(_) => {
                "Check file permissions in the project directory".to_string()
            }
            DevError::ConfigError { .. } => "Fix the syntax of dev.toml".to_string(),
            DevError::InvalidConfigValueError { field, .. } => {
                format!("Correct `{}` in dev.toml", field)
            }
            DevError::OutputDecodeError { .. } => {
                "Re-run the command; the package installer printed unexpected bytes".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DevError::SpawnError { program, .. } => format!("Could not run {}", program),
            DevError::IoError(e) => format!("File system error: {}", e),
            DevError::ConfigError { message } => format!("Invalid dev.toml: {}", message),
            DevError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            DevError::OutputDecodeError { program, .. } => {
                format!("Unreadable output from {}", program)
            }
        }
    }

    /// 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_is_critical() {
        let err = DevError::SpawnError {
            program: "venv/bin/pip".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Process);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("dev b"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = DevError::InvalidConfigValueError {
            field: "environment.path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid setting environment.path: Path cannot be empty"
        );
    }
}
