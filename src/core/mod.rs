pub mod runner;

pub use crate::domain::ports::Bundler;
pub use crate::utils::error::Result;
