use crate::core::build::build;
use crate::core::freeze::freeze;
use crate::core::test_runner::run_tests;
use crate::core::upgrade::upgrade;
use crate::core::workspace::Workspace;
use crate::domain::model::Outcome;
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use std::ffi::{OsStr, OsString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Build,
    Freeze,
    Test,
    Upgrade,
}

impl Selector {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Selector::Build),
            'f' => Some(Selector::Freeze),
            't' => Some(Selector::Test),
            'u' => Some(Selector::Upgrade),
            _ => None,
        }
    }

    /// 只看第一個字元，所以 `build`、`b`、`bogus` 都是 Build；`--` 不是任何指令
    pub fn from_arg(arg: &OsStr) -> Option<Self> {
        arg.to_string_lossy().chars().next().and_then(Self::from_char)
    }

    pub fn name(self) -> &'static str {
        match self {
            Selector::Build => "build",
            Selector::Freeze => "freeze",
            Selector::Test => "test",
            Selector::Upgrade => "upgrade",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub selector: Selector,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// 不含程式名稱的原始參數，包括 `--` 在內都不做任何解讀。
    /// None 代表什麼都不做：沒有指令或無法辨識的選擇字元
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let command = args.next()?;
        let selector = Selector::from_arg(&command)?;
        Some(Self {
            selector,
            args: args.collect(),
        })
    }

    /// 目前行程的參數
    pub fn from_env() -> Option<Self> {
        Self::from_args(std::env::args_os().skip(1))
    }
}

pub struct Dispatcher<R: CommandRunner> {
    workspace: Workspace<R>,
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn new(workspace: Workspace<R>) -> Self {
        Self { workspace }
    }

    pub async fn dispatch(&self, invocation: Invocation) -> Result<Outcome> {
        let Invocation { selector, args } = invocation;
        tracing::debug!("Dispatching {} with {:?}", selector.name(), args);

        if selector != Selector::Test && !args.is_empty() {
            tracing::debug!("Ignoring extra arguments for {}", selector.name());
        }

        match selector {
            Selector::Build => {
                let report = build(&self.workspace).await?;
                tracing::debug!("Build finished: {:?}", report);
                Ok(Outcome::Completed)
            }
            Selector::Freeze => {
                freeze(&self.workspace).await?;
                Ok(Outcome::Completed)
            }
            Selector::Test => {
                let status = run_tests(&self.workspace, &args).await?;
                Ok(Outcome::Exited(status))
            }
            Selector::Upgrade => {
                let report = upgrade(&self.workspace).await?;
                tracing::debug!("Upgrade finished: {:?}", report);
                Ok(Outcome::Completed)
            }
        }
    }

    pub async fn dispatch_args<I, S>(&self, args: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        match Invocation::from_args(args) {
            Some(invocation) => self.dispatch(invocation).await,
            None => Ok(Outcome::NoOp),
        }
    }
}
