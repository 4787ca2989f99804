pub mod build;
pub mod dispatcher;
pub mod freeze;
pub mod test_runner;
pub mod upgrade;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{ExternalCommand, Layout, Outcome, Platform, RunStatus};
pub use crate::domain::ports::CommandRunner;
pub use crate::utils::error::Result;
