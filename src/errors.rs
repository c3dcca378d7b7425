use thiserror::Error;

/// User-facing message for generation failures that are not the caller's
/// fault. Transport and model detail goes to the log, not the screen.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to generate questions from the document. Please try again.";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    FileType(String),

    #[error("Could not read the PDF: {0}")]
    Extraction(String),

    #[error("The document does not contain enough text to generate a quiz")]
    ContentTooShort,

    #[error("Missing or invalid API credential: {0}")]
    Credential(String),

    #[error("Model returned an unexpected response shape: {0}")]
    Schema(String),

    #[error("Failed to generate questions from the document. Please try again.")]
    Generation,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::FileType(_) => "FILE_TYPE",
            AppError::Extraction(_) => "EXTRACTION",
            AppError::ContentTooShort => "CONTENT_TOO_SHORT",
            AppError::Credential(_) => "CREDENTIAL",
            AppError::Schema(_) => "SCHEMA",
            AppError::Generation => "GENERATION",
            AppError::Validation(_) => "VALIDATION",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
