use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreemarkError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("project root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("cannot write output to {}: {}", .path.display(), .source)]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("walk error: {0}")]
    Walk(String),
}
impl TreemarkError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TreemarkError::Config(message.into())
    }
}
