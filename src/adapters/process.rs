use crate::domain::model::{CapturedOutput, ExternalCommand, RunStatus};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{DevError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// 以 tokio 啟動子行程，工作目錄固定為專案根目錄
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    working_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, command: &ExternalCommand) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).current_dir(&self.working_dir);
        cmd
    }

    fn spawn_error(command: &ExternalCommand, source: std::io::Error) -> DevError {
        DevError::SpawnError {
            program: command.program_name(),
            source,
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn status(&self, command: &ExternalCommand) -> Result<RunStatus> {
        tracing::debug!("Running: {}", command);
        let status = self
            .command(command)
            .status()
            .await
            .map_err(|e| Self::spawn_error(command, e))?;
        Ok(status.into())
    }

    async fn output(&self, command: &ExternalCommand) -> Result<CapturedOutput> {
        tracing::debug!("Running (capturing stdout): {}", command);
        let output = self
            .command(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| Self::spawn_error(command, e))?;

        Ok(CapturedOutput {
            status: output.status.into(),
            stdout: output.stdout,
        })
    }

    async fn status_to_file(&self, command: &ExternalCommand, path: &Path) -> Result<RunStatus> {
        tracing::debug!("Running: {} > {}", command, path.display());
        // 跟 shell 重導向一樣，子行程啟動前檔案就已被清空
        let file = std::fs::File::create(path)?;
        let status = self
            .command(command)
            .stdout(Stdio::from(file))
            .status()
            .await
            .map_err(|e| Self::spawn_error(command, e))?;
        Ok(status.into())
    }
}
