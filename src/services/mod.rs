pub mod extraction_service;
pub mod model_service;
pub mod quiz_flow;

pub use extraction_service::PdfExtractor;
pub use model_service::{ModelService, OpenAiTextModel, TextModel};
pub use quiz_flow::QuizFlow;
