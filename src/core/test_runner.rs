use crate::core::workspace::Workspace;
use crate::domain::model::RunStatus;
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use std::ffi::OsString;

/// 以 venv 的 pytest 執行，參數原樣轉交；退出碼交給呼叫端
pub async fn run_tests<R: CommandRunner>(
    workspace: &Workspace<R>,
    args: &[OsString],
) -> Result<RunStatus> {
    let command = workspace.pytest().args(args.iter().cloned());
    let status = workspace.runner().status(&command).await?;
    tracing::debug!("pytest finished with {:?}", status.code);
    Ok(status)
}
