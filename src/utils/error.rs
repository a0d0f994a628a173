use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Bundler process failed: {status}")]
    BundlerFailed { status: std::process::ExitStatus },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;
