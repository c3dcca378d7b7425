pub mod request;

pub use request::{GenerateQuizRequest, UploadedFile};
