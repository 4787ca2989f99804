use crate::domain::model::{ExternalCommand, Layout, RunStatus};
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;

/// 各指令共用的專案佈局與行程執行器
pub struct Workspace<R: CommandRunner> {
    runner: R,
    layout: Layout,
}

impl<R: CommandRunner> Workspace<R> {
    pub fn new(runner: R, layout: Layout) -> Self {
        Self { runner, layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn pip(&self) -> ExternalCommand {
        ExternalCommand::new(self.layout.venv_tool("pip"))
    }

    pub fn python(&self) -> ExternalCommand {
        ExternalCommand::new(self.layout.venv_tool("python"))
    }

    pub fn pytest(&self) -> ExternalCommand {
        ExternalCommand::new(self.layout.venv_tool("pytest"))
    }

    /// 執行並等待，非零退出碼只記錄不中斷
    pub async fn run_unchecked(&self, command: &ExternalCommand) -> Result<RunStatus> {
        let status = self.runner.status(command).await?;
        log_unchecked(command, status);
        Ok(status)
    }
}

pub(crate) fn log_unchecked(command: &ExternalCommand, status: RunStatus) {
    if !status.success() {
        tracing::warn!(
            "⚠️ `{}` exited with {:?}, continuing",
            command,
            status.code
        );
    }
}
