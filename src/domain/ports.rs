use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Bundler: Send + Sync {
    async fn build(&self, config_file: &Path) -> Result<()>;
}
