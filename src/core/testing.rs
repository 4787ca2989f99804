use crate::config::toml_config::ProjectConfig;
use crate::domain::model::{CapturedOutput, ExternalCommand, Layout, Platform, RunStatus};
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Status(ExternalCommand),
    Output(ExternalCommand),
    ToFile(ExternalCommand, PathBuf),
}

impl Call {
    pub fn command(&self) -> &ExternalCommand {
        match self {
            Call::Status(command) | Call::Output(command) | Call::ToFile(command, _) => command,
        }
    }
}

/// 記錄所有呼叫；輸出與退出碼以參數字串 (例如 "freeze") 為 key
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<Call>>>,
    stdout: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    exit_codes: Arc<Mutex<HashMap<String, i32>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(self, args: &str, stdout: impl AsRef<[u8]>) -> Self {
        self.stdout
            .lock()
            .unwrap()
            .insert(args.to_string(), stdout.as_ref().to_vec());
        self
    }

    pub fn with_exit_code(self, args: &str, code: i32) -> Self {
        self.exit_codes
            .lock()
            .unwrap()
            .insert(args.to_string(), code);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| call.command().to_string())
            .collect()
    }

    fn record(&self, call: Call) -> (RunStatus, Vec<u8>) {
        let key = call
            .command()
            .args
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(call);
        let code = self.exit_codes.lock().unwrap().get(&key).copied().unwrap_or(0);
        let stdout = self
            .stdout
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default();
        (RunStatus { code: Some(code) }, stdout)
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn status(&self, command: &ExternalCommand) -> Result<RunStatus> {
        Ok(self.record(Call::Status(command.clone())).0)
    }

    async fn output(&self, command: &ExternalCommand) -> Result<CapturedOutput> {
        let (status, stdout) = self.record(Call::Output(command.clone()));
        Ok(CapturedOutput { status, stdout })
    }

    async fn status_to_file(&self, command: &ExternalCommand, path: &Path) -> Result<RunStatus> {
        let (status, stdout) = self.record(Call::ToFile(command.clone(), path.to_path_buf()));
        std::fs::write(path, stdout)?;
        Ok(status)
    }
}

pub fn layout(root: &Path, platform: Platform) -> Layout {
    ProjectConfig::default().layout(root, platform)
}
