use crate::core::freeze::freeze;
use crate::core::workspace::{log_unchecked, Workspace};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{DevError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeReport {
    UpToDate,
    Upgraded(Vec<String>),
}

/// 從 `name==version` 清單取出套件名稱
pub fn parse_outdated(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(|line| line.split_once("==").map_or(line, |(name, _)| name))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// 升級所有過期套件（不鎖版本），然後重寫 manifest
pub async fn upgrade<R: CommandRunner>(workspace: &Workspace<R>) -> Result<UpgradeReport> {
    let list = workspace
        .pip()
        .args(["list", "--format", "freeze", "--outdated"]);
    let output = workspace.runner().output(&list).await?;
    log_unchecked(&list, output.status);

    let listing = String::from_utf8(output.stdout).map_err(|e| DevError::OutputDecodeError {
        program: list.program_name(),
        message: e.to_string(),
    })?;

    let packages = parse_outdated(&listing);
    if packages.is_empty() {
        tracing::info!("✅ All packages are up to date");
        return Ok(UpgradeReport::UpToDate);
    }

    tracing::info!("⬆️ Upgrading {}", packages.join(" "));
    let install = workspace
        .python()
        .args(["-m", "pip", "install", "--upgrade"])
        .args(packages.iter().cloned());
    workspace.run_unchecked(&install).await?;

    freeze(workspace).await?;
    Ok(UpgradeReport::Upgraded(packages))
}
