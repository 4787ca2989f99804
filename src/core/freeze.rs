use crate::core::workspace::{log_unchecked, Workspace};
use crate::domain::model::RunStatus;
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;

/// `pip freeze > manifest`，整份覆寫
pub async fn freeze<R: CommandRunner>(workspace: &Workspace<R>) -> Result<RunStatus> {
    let manifest = workspace.layout().manifest_path();
    let command = workspace.pip().arg("freeze");

    tracing::info!("📌 Writing pinned packages to {}", manifest.display());
    let status = workspace
        .runner()
        .status_to_file(&command, &manifest)
        .await?;
    log_unchecked(&command, status);
    Ok(status)
}
