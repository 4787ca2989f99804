use crate::domain::model::{CapturedOutput, ExternalCommand, RunStatus};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// 外部行程的執行介面；Err 只代表行程無法啟動，非零退出碼照常回傳
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// 繼承終端的 stdio，等待結束
    async fn status(&self, command: &ExternalCommand) -> Result<RunStatus>;

    /// 擷取 stdout，stderr 仍輸出到終端
    async fn output(&self, command: &ExternalCommand) -> Result<CapturedOutput>;

    /// 等同 shell 的 `> path`：先清空檔案，再把 stdout 寫進去
    async fn status_to_file(&self, command: &ExternalCommand, path: &Path) -> Result<RunStatus>;
}
