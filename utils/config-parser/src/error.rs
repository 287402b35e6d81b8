use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
