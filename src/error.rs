#[derive(thiserror::Error, Debug)]
pub enum PracticeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid scoring policy: {0}")]
    InvalidPolicy(String),
    #[error("Word '{id}' has no example sentence to practice.")]
    MissingExample { id: String },
}
