use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoffeeError {
    #[error("Invalid argument for {field}: {value} ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Iteration advanced past the end of the set")]
    NoSuchElement,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
