use std::path::{Path, PathBuf};

/// 打包工具設定檔的固定路徑
pub const DEFAULT_CONFIG_FILE: &str = "./vite.config.js";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    config_file: PathBuf,
}

impl BuildConfig {
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
