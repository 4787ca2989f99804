use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// venv 建立完成的標記檔
pub const VENV_MARKER: &str = "pyvenv.cfg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// 能在 PATH 上找到 cmd.exe 就視為 Windows（WSL 也算在內）
    pub fn detect() -> Self {
        if which::which("cmd.exe").is_ok() {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// venv 裡放可執行檔的子目錄
    pub fn bin_dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "Scripts",
            Platform::Unix => "bin",
        }
    }

    /// 原生輔助程式只在 Windows 上追蹤
    pub fn tracks_native_helper(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: PathBuf,
    /// 使用者轉交的參數可能不是 UTF-8，原樣保留
    pub args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// None 表示子行程被 signal 終止
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: RunStatus,
    pub stdout: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeHelper {
    pub binary: PathBuf,
    pub source: PathBuf,
    pub build_command: ExternalCommand,
}

/// 解析完成的專案佈局，所有路徑都已掛在專案根目錄下
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub platform: Platform,
    /// 相對於 root，原樣交給子行程
    pub venv_dir: String,
    pub manifest: String,
    pub interpreter: String,
    pub native_helper: Option<NativeHelper>,
}

impl Layout {
    pub fn venv_path(&self) -> PathBuf {
        self.root.join(&self.venv_dir)
    }

    pub fn venv_marker(&self) -> PathBuf {
        self.venv_path().join(VENV_MARKER)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    /// venv 內的工具，例如 pip / pytest / python
    pub fn venv_tool(&self, name: &str) -> PathBuf {
        self.venv_path()
            .join(self.platform.bin_dir_name())
            .join(name)
    }
}

/// 一次分派的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoOp,
    Completed,
    Exited(RunStatus),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NoOp | Outcome::Completed => 0,
            Outcome::Exited(status) => status
                .code
                .map(|code| u8::try_from(code).unwrap_or(1))
                .unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(platform: Platform) -> Layout {
        Layout {
            root: PathBuf::from("/work/project"),
            platform,
            venv_dir: "venv".to_string(),
            manifest: "requirements.txt".to_string(),
            interpreter: "python3".to_string(),
            native_helper: None,
        }
    }

    #[test]
    fn test_venv_tool_uses_platform_bin_dir() {
        assert_eq!(
            layout(Platform::Unix).venv_tool("pip"),
            PathBuf::from("/work/project/venv/bin/pip")
        );
        assert_eq!(
            layout(Platform::Windows).venv_tool("pip"),
            PathBuf::from("/work/project/venv/Scripts/pip")
        );
    }

    #[test]
    fn test_marker_and_manifest_paths() {
        let layout = layout(Platform::Unix);
        assert_eq!(
            layout.venv_marker(),
            PathBuf::from("/work/project/venv/pyvenv.cfg")
        );
        assert_eq!(
            layout.manifest_path(),
            PathBuf::from("/work/project/requirements.txt")
        );
    }

    #[test]
    fn test_command_display() {
        let command = ExternalCommand::new("pip").args(["install", "-q"]).arg("-r");
        assert_eq!(command.to_string(), "pip install -q -r");
    }

    #[test]
    fn test_outcome_exit_code() {
        assert_eq!(Outcome::NoOp.exit_code(), 0);
        assert_eq!(Outcome::Completed.exit_code(), 0);
        assert_eq!(Outcome::Exited(RunStatus { code: Some(5) }).exit_code(), 5);
        assert_eq!(Outcome::Exited(RunStatus { code: None }).exit_code(), 1);
        assert_eq!(Outcome::Exited(RunStatus { code: Some(-1) }).exit_code(), 1);
    }
}
