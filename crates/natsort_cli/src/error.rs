use natsort::SortError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid sort levels: {0}")]
    InvalidLevels(#[source] SortError),

    #[error("Sort rejected: {0}")]
    Rejected(#[from] SortError),
}

pub type Result<T> = std::result::Result<T, CliError>;
