use thiserror::Error;

pub type ListingResult<T> = Result<T, ListingError>;

#[derive(Error, Debug)]
pub enum ListingError {
    /// The model output held no JSON object, or the object did not parse.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Proxy(#[from] ProxyError),
}

impl ListingError {
    /// Whether the user can sensibly retry the whole generation.
    pub fn is_retryable(&self) -> bool {
        match self {
            ListingError::Parse(_) => true,
            ListingError::Proxy(e) => e.is_retryable(),
            ListingError::Config(_) | ListingError::Io(_) => false,
        }
    }
}

/// Failures reported by the model-call proxy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Model proxy is rate limiting requests")]
    RateLimited,

    #[error("Model proxy returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Model proxy request failed: {0}")]
    Transport(String),
}

impl ProxyError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ProxyError::RateLimited | ProxyError::Transport(_) => true,
            ProxyError::Status { status, .. } => *status >= 500,
        }
    }
}
