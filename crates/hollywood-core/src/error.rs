use thiserror::Error;

#[derive(Debug, Error)]
pub enum HollywoodError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("invalid graph parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, HollywoodError>;
