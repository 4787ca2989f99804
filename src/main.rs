use dev_runner::domain::model::Outcome;
use dev_runner::utils::{logger, validation::Validate};
use dev_runner::{DevError, Dispatcher, Invocation, ProcessRunner, Project, Workspace};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 參數原樣取用（含 `--` 與非 UTF-8），不經過旗標解析。
    // 沒有指令或選擇字元無法辨識：直接結束，不讀設定也不碰檔案
    let Some(invocation) = Invocation::from_env() else {
        return ExitCode::SUCCESS;
    };

    match run(invocation).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ dev failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(invocation: Invocation) -> Result<Outcome, DevError> {
    let cwd = std::env::current_dir()?;
    let project = Project::discover(&cwd)?;

    logger::init_cli_logger(
        project.config.logging.verbose,
        project.config.logging.format,
    );
    tracing::debug!("Project root: {}", project.root.display());

    project.config.validate()?;

    let platform = project.config.environment.platform.resolve();
    tracing::debug!("Platform: {:?}", platform);

    let runner = ProcessRunner::new(project.root.clone());
    let dispatcher = Dispatcher::new(Workspace::new(runner, project.layout(platform)));
    dispatcher.dispatch(invocation).await
}
