use serde::{Deserialize, Serialize};

/// Translated display text for one quiz card, cached lazily on demand.
/// Never persisted and never shared across cards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardTranslation {
    pub question: String,
    pub options: Vec<String>,
}
