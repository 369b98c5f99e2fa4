use thiserror::Error;

pub type Result<T> = std::result::Result<T, WfpError>;

#[derive(Debug, Error)]
pub enum WfpError {
    #[error("config error: {0}")]
    Config(String),

    #[error("allocation failed: {0}")]
    Alloc(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
