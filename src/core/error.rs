use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    SceneError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoverError>;
