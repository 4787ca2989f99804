use crate::core::workspace::Workspace;
use crate::domain::model::{ExternalCommand, NativeHelper};
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub helper_rebuilt: bool,
    pub venv_created: bool,
}

/// 重建原生輔助程式（需要時）、確保 venv 存在、依 manifest 安裝套件
pub async fn build<R: CommandRunner>(workspace: &Workspace<R>) -> Result<BuildReport> {
    let layout = workspace.layout();
    let mut report = BuildReport::default();

    if layout.platform.tracks_native_helper() {
        if let Some(helper) = &layout.native_helper {
            if needs_rebuild(helper).await? {
                tracing::info!("🔨 Rebuilding {}", helper.binary.display());
                workspace.run_unchecked(&helper.build_command).await?;
                report.helper_rebuilt = true;
            }
        }
    }

    report.venv_created = ensure_venv(workspace).await?;

    let install = workspace
        .pip()
        .args(["install", "-q", "-r"])
        .arg(layout.manifest.as_str());
    workspace.run_unchecked(&install).await?;

    Ok(report)
}

/// 只看標記檔，存在就不重建
pub async fn ensure_venv<R: CommandRunner>(workspace: &Workspace<R>) -> Result<bool> {
    let layout = workspace.layout();
    let marker = layout.venv_marker();

    if tokio::fs::try_exists(&marker).await? {
        tracing::debug!("Virtual environment present ({})", marker.display());
        return Ok(false);
    }

    tracing::info!("📦 Creating virtual environment in {}", layout.venv_dir);
    let create = ExternalCommand::new(layout.interpreter.as_str())
        .args(["-m", "venv"])
        .arg(layout.venv_dir.as_str());
    workspace.run_unchecked(&create).await?;
    Ok(true)
}

/// 原始碼存在，且執行檔不存在或修改時間嚴格早於原始碼
pub async fn needs_rebuild(helper: &NativeHelper) -> Result<bool> {
    let Some(source_time) = modified(&helper.source).await? else {
        return Ok(false);
    };

    match modified(&helper.binary).await? {
        None => Ok(true),
        Some(binary_time) => Ok(binary_time < source_time),
    }
}

async fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata.modified()?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
