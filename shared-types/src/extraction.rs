/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
