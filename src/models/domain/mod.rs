pub mod mcq;
pub mod quiz;
pub mod session;
pub mod translation;

pub use mcq::Mcq;
pub use quiz::Quiz;
pub use session::{QuizSession, ResultsMode, Screen};
pub use translation::CardTranslation;
