use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One multiple-choice question with a single correct option.
///
/// Invariant: `answer` is an exact element of `options`. Records coming
/// back from the model are filtered through [`Mcq::is_valid`] before they
/// reach a quiz, so every stored question satisfies it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Mcq {
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty()
            && !self.options.is_empty()
            && self.options.iter().any(|option| option == &self.answer)
    }

    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_mcq(question: &str, options: &[&str], answer: &str) -> Mcq {
        Mcq {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn mcq_with_answer_among_options_is_valid() {
        let mcq = make_mcq("Capital of France?", &["Paris", "Lyon", "Nice", "Lille"], "Paris");

        assert!(mcq.is_valid());
        assert_eq!(mcq.answer_index(), Some(0));
    }

    #[test]
    fn mcq_with_answer_outside_options_is_invalid() {
        let mcq = make_mcq("Capital of France?", &["Lyon", "Nice", "Lille", "Brest"], "Paris");

        assert!(!mcq.is_valid());
        assert_eq!(mcq.answer_index(), None);
    }

    #[test]
    fn mcq_answer_match_is_exact_not_fuzzy() {
        let mcq = make_mcq("Pick one", &["paris", "Lyon"], "Paris");

        assert!(!mcq.is_valid());
    }

    #[test]
    fn mcq_with_blank_question_or_no_options_is_invalid() {
        assert!(!make_mcq("   ", &["A", "B"], "A").is_valid());
        assert!(!make_mcq("Question?", &[], "A").is_valid());
    }

    #[test]
    fn mcq_round_trip_serialization() {
        let mcq = make_mcq("Q?", &["A", "B", "C", "D"], "C");

        let json = serde_json::to_string(&mcq).expect("mcq should serialize");
        let parsed: Mcq = serde_json::from_str(&json).expect("mcq should deserialize");

        assert_eq!(mcq, parsed);
    }
}
