use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing parameter, or an inconsistent scheme setup.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Internal consistency check failed during setup, nothing was solved.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error(
        "non-finite value at index {index} during step {step}, \
         last valid step was {last_valid_step}"
    )]
    Instability {
        step: usize,
        index: usize,
        last_valid_step: usize,
    },

    #[error("cancelled after {completed} steps")]
    Cancelled { completed: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
