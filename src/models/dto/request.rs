use serde::Deserialize;
use validator::Validate;

/// Inclusive bounds of the question-count control on the upload screen.
/// The gateway itself accepts any positive count; these bounds belong to
/// the user-facing surface only.
pub const MIN_QUESTION_COUNT: u8 = 3;
pub const MAX_QUESTION_COUNT: u8 = 15;
pub const DEFAULT_QUESTION_COUNT: u8 = 9;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(range(min = 3, max = 15))]
    pub num_questions: u8,
}

impl Default for GenerateQuizRequest {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// A file handed over by the picker: name plus raw bytes. Carried as a
/// value so type checks are testable without touching a filesystem.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.name
            .rsplit('.')
            .next()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            && self.name.contains('.')
    }
}
