use crate::domain::model::{ExternalCommand, Layout, NativeHelper, Platform};
use crate::utils::error::{DevError, Result};
use crate::utils::validation::{
    validate_command_line, validate_non_empty_string, validate_path, validate_relative_path,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "dev.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub environment: EnvironmentConfig,
    pub native_helper: NativeHelperConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub path: String,
    pub interpreter: String,
    pub manifest: String,
    pub platform: PlatformSetting,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            path: "venv".to_string(),
            interpreter: "python3".to_string(),
            manifest: "requirements.txt".to_string(),
            platform: PlatformSetting::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    #[default]
    Auto,
    Windows,
    Unix,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::detect(),
            PlatformSetting::Windows => Platform::Windows,
            PlatformSetting::Unix => Platform::Unix,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeHelperConfig {
    pub enabled: bool,
    pub binary: String,
    pub source: String,
    pub build_command: Vec<String>,
}

impl Default for NativeHelperConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            binary: "activity_monitor.exe".to_string(),
            source: "activity_monitor.cpp".to_string(),
            build_command: vec![
                "cmd.exe".to_string(),
                "/c".to_string(),
                "build_activity_monitor.bat".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// 找到的專案：根目錄加上（可能是預設的）設定
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: ProjectConfig,
}

impl Project {
    /// 從 start 往上找 dev.toml；找不到就以 start 為根目錄並使用預設值
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!("Using configuration {}", candidate.display());
                return Ok(Self {
                    root: dir.to_path_buf(),
                    config: ProjectConfig::from_file(&candidate)?,
                });
            }
        }

        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self {
            root: start.to_path_buf(),
            config: ProjectConfig::default(),
        })
    }

    pub fn layout(&self, platform: Platform) -> Layout {
        self.config.layout(&self.root, platform)
    }
}

impl ProjectConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DevError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DevError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PYTHON})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DevError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn layout(&self, root: &Path, platform: Platform) -> Layout {
        let native_helper = self.native_helper.enabled.then(|| {
            let mut parts = self.native_helper.build_command.iter();
            let program = parts.next().cloned().unwrap_or_default();
            NativeHelper {
                binary: root.join(&self.native_helper.binary),
                source: root.join(&self.native_helper.source),
                build_command: ExternalCommand::new(program).args(parts.cloned()),
            }
        });

        Layout {
            root: root.to_path_buf(),
            platform,
            venv_dir: self.environment.path.clone(),
            manifest: self.environment.manifest.clone(),
            interpreter: self.environment.interpreter.clone(),
            native_helper,
        }
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        validate_relative_path("environment.path", &self.environment.path)?;
        validate_relative_path("environment.manifest", &self.environment.manifest)?;
        validate_non_empty_string("environment.interpreter", &self.environment.interpreter)?;

        if self.native_helper.enabled {
            validate_path("native_helper.binary", &self.native_helper.binary)?;
            validate_path("native_helper.source", &self.native_helper.source)?;
            validate_command_line(
                "native_helper.build_command",
                &self.native_helper.build_command,
            )?;
        }

        Ok(())
    }
}
