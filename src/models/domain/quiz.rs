use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::mcq::Mcq;

/// An ordered sequence of validated questions. Fixed once generated;
/// replaced wholesale when the user starts over.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub questions: Vec<Mcq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(questions: Vec<Mcq>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            questions,
            created_at: Some(Utc::now()),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Mcq> {
        self.questions.get(index)
    }
}
