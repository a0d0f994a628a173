pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::process::ProcessBundler;
pub use crate::config::BuildConfig;
pub use crate::core::runner::BuildRunner;
pub use crate::domain::ports::Bundler;
pub use crate::utils::error::{BuildError, Result};
