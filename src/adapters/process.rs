use crate::domain::ports::Bundler;
use crate::utils::error::{BuildError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// 透過子行程呼叫實際的打包工具
#[derive(Debug, Clone)]
pub struct ProcessBundler {
    program: String,
    args: Vec<String>,
}

impl ProcessBundler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn vite() -> Self {
        Self::new("vite", vec!["build".to_string()])
    }
}

#[async_trait]
impl Bundler for ProcessBundler {
    async fn build(&self, config_file: &Path) -> Result<()> {
        tracing::debug!("Spawning bundler: {} {:?}", self.program, self.args);

        // stdout/stderr 繼承自父行程，打包工具的輸出直接顯示在主控台
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg("--config")
            .arg(config_file)
            .status()
            .await?;

        tracing::debug!("Bundler exited: {}", status);

        if !status.success() {
            return Err(BuildError::BundlerFailed { status });
        }

        Ok(())
    }
}
