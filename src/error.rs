use thiserror::Error;

/// Failures inside the assistant's handlers.
///
/// None of these escape a handler: each one is rendered into the reply text
/// so the caller always gets a string back.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// An OS action was requested but there is no display to act on.
    #[error("Cannot {0} in headless environment")]
    Unavailable(String),

    /// A live metrics read failed (host lookup, missing disk, ...).
    #[error("{0}")]
    Metrics(String),

    /// The chat API could not be reached or answered with an error.
    #[error("AI request failed: {0}")]
    Remote(String),

    /// Starting a process or the browser failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
