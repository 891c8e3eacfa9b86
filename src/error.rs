use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsskeysError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stylesheet error: {0}")]
    Parse(#[from] csskeys::ParseError),

    #[error("A logger was already installed")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CsskeysError>;
