use crate::config::BuildConfig;
use crate::core::Bundler;
use crate::utils::error::Result;

pub struct BuildRunner<B: Bundler> {
    bundler: B,
    config: BuildConfig,
}

impl<B: Bundler> BuildRunner<B> {
    pub fn new(bundler: B, config: BuildConfig) -> Self {
        Self { bundler, config }
    }

    pub async fn run(&self) -> Result<()> {
        println!("Starting build...");
        tracing::info!(
            "Using bundler config: {}",
            self.config.config_file().display()
        );

        // 唯一的非同步呼叫，不重試
        self.bundler.build(self.config.config_file()).await?;

        println!("Build complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BuildError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockBundler {
        calls: Arc<Mutex<Vec<PathBuf>>>,
        fail: bool,
    }

    impl MockBundler {
        fn new(fail: bool) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail,
            }
        }

        fn calls(&self) -> Vec<PathBuf> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Bundler for MockBundler {
        async fn build(&self, config_file: &Path) -> Result<()> {
            self.calls.lock().unwrap().push(config_file.to_path_buf());
            if self.fail {
                Err(BuildError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "bundler exploded",
                )))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn run_invokes_bundler_once_with_config_file() {
        let bundler = MockBundler::new(false);
        let runner = BuildRunner::new(bundler.clone(), BuildConfig::default());

        let result = runner.run().await;

        assert!(result.is_ok());
        assert_eq!(bundler.calls(), vec![PathBuf::from("./vite.config.js")]);
    }

    #[tokio::test]
    async fn run_propagates_bundler_failure() {
        let bundler = MockBundler::new(true);
        let runner = BuildRunner::new(bundler.clone(), BuildConfig::default());

        let result = runner.run().await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("bundler exploded"));
        // 失敗時也只呼叫一次
        assert_eq!(bundler.calls().len(), 1);
    }

    #[tokio::test]
    async fn run_uses_custom_config_file() {
        let bundler = MockBundler::new(false);
        let runner = BuildRunner::new(bundler.clone(), BuildConfig::new("custom.config.js"));

        runner.run().await.unwrap();

        assert_eq!(bundler.calls(), vec![PathBuf::from("custom.config.js")]);
    }
}
