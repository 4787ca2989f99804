pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::process::ProcessRunner;
pub use crate::config::toml_config::{Project, ProjectConfig};
pub use crate::core::dispatcher::{Dispatcher, Invocation, Selector};
pub use crate::core::workspace::Workspace;
pub use crate::utils::error::{DevError, Result};
