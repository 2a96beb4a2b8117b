use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),

    #[error("Selector error: {0}")]
    Selector(#[from] selector_builder::SelectorError),

    #[error("JSON error: {0}")]
    Json(#[from] objects::JsonError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, KataError>;
