use std::sync::Arc;

use validator::Validate;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizSession};
use crate::models::dto::{GenerateQuizRequest, UploadedFile};
use crate::services::extraction_service::PdfExtractor;
use crate::services::model_service::{ModelService, OpenAiTextModel};

/// Minimum number of extracted characters worth spending a generation
/// request on. Under-threshold documents are rejected before the gateway
/// is ever invoked.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Drives the upload -> loading -> results flow: upload validation,
/// text extraction, MCQ generation, and the session transitions around
/// them. The view layer dispatches user actions here.
pub struct QuizFlow {
    model_service: Arc<ModelService>,
}

impl QuizFlow {
    pub fn new(model_service: Arc<ModelService>) -> Self {
        Self { model_service }
    }

    pub fn from_config(config: &Config) -> Self {
        let model = Arc::new(OpenAiTextModel::from_config(config));
        Self::new(Arc::new(ModelService::new(model)))
    }

    /// Handle the submit action from the welcome screen.
    ///
    /// On success the session lands on results in study mode. Any failure
    /// aborts the action, returns the session to the welcome screen with
    /// a single human-readable message, and is also returned to the
    /// caller. No automatic retries.
    pub async fn submit_upload(
        &self,
        session: &mut QuizSession,
        upload: UploadedFile,
        request: GenerateQuizRequest,
    ) -> AppResult<()> {
        session.begin_loading();

        match self.run_pipeline(upload, request).await {
            Ok(quiz) => {
                log::info!("generated quiz {} with {} question(s)", quiz.id, quiz.len());
                session.present_quiz(quiz);
                Ok(())
            }
            Err(err) => {
                log::warn!("quiz generation aborted: {}", err);
                session.fail_to_welcome(err.to_string());
                Err(err)
            }
        }
    }

    async fn run_pipeline(
        &self,
        upload: UploadedFile,
        request: GenerateQuizRequest,
    ) -> AppResult<Quiz> {
        if !upload.is_pdf() {
            return Err(AppError::FileType(upload.name));
        }
        request.validate()?;

        let text = PdfExtractor::extract_text(upload.bytes).await?;
        if text.trim().chars().count() < MIN_CONTENT_CHARS {
            return Err(AppError::ContentTooShort);
        }

        let mcqs = self
            .model_service
            .generate_mcqs(&text, request.num_questions as usize)
            .await?;

        Ok(Quiz::new(mcqs))
    }

    /// Translate one card's question and options on demand, caching the
    /// result on the session. A cached card returns without a network
    /// call; requests for indexes outside the quiz are ignored.
    pub async fn translate_card(&self, session: &mut QuizSession, index: usize) -> AppResult<()> {
        if session.translation(index).is_some() {
            return Ok(());
        }

        let Some(mcq) = session.quiz().and_then(|quiz| quiz.question(index)).cloned() else {
            return Ok(());
        };

        let translation = self
            .model_service
            .translate_card(&mcq.question, &mcq.options)
            .await?;
        session.set_translation(index, translation);

        Ok(())
    }
}
