use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComparerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Folder {} does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl From<toml::de::Error> for ComparerError {
    fn from(err: toml::de::Error) -> Self {
        ComparerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ComparerError>;
