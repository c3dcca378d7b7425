use std::collections::HashMap;

use crate::models::domain::translation::CardTranslation;
use crate::models::domain::Quiz;

/// Results sub-mode. Submission state only exists while in test mode, so
/// "submitted while studying" cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsMode {
    Study,
    Test { submitted: bool },
}

/// The screen currently presented to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome { error: Option<String> },
    Loading,
    Results { mode: ResultsMode },
}

/// Session state machine for the upload -> loading -> results flow.
///
/// The quiz and answer set are created empty, populated once by a single
/// generation, and discarded entirely on start-over. Mutations happen on
/// one logical thread between suspension points, so no interior locking
/// is needed here.
#[derive(Clone, Debug)]
pub struct QuizSession {
    screen: Screen,
    quiz: Option<Quiz>,
    answers: HashMap<usize, String>,
    translations: HashMap<usize, CardTranslation>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome { error: None },
            quiz: None,
            answers: HashMap::new(),
            translations: HashMap::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    /// Submit started: show the loading screen until the pipeline
    /// resolves one way or the other.
    pub fn begin_loading(&mut self) {
        self.screen = Screen::Loading;
    }

    /// Any extraction or generation failure aborts the action and lands
    /// back on the welcome screen with a single human-readable message.
    pub fn fail_to_welcome(&mut self, message: String) {
        self.screen = Screen::Welcome {
            error: Some(message),
        };
    }

    /// Generation succeeded: install the quiz and open results in study
    /// mode with a clean answer set.
    pub fn present_quiz(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
        self.answers.clear();
        self.translations.clear();
        self.screen = Screen::Results {
            mode: ResultsMode::Study,
        };
    }

    /// Full reset: back to the welcome screen with no file, no quiz, no
    /// answers, no cached translations.
    pub fn start_over(&mut self) {
        *self = Self::new();
    }

    pub fn enter_study_mode(&mut self) {
        if let Screen::Results { mode } = &mut self.screen {
            *mode = ResultsMode::Study;
        }
    }

    /// Switching into test mode always starts un-submitted, including
    /// when coming back from study after a submission.
    pub fn enter_test_mode(&mut self) {
        if let Screen::Results { mode } = &mut self.screen {
            *mode = ResultsMode::Test { submitted: false };
        }
    }

    /// Finalize the test. Only meaningful while in un-submitted test
    /// mode; a no-op everywhere else.
    pub fn submit_test(&mut self) {
        if let Screen::Results { mode } = &mut self.screen {
            if matches!(mode, ResultsMode::Test { .. }) {
                *mode = ResultsMode::Test { submitted: true };
            }
        }
    }

    /// Record the user's choice for question `index`, overwriting any
    /// prior answer. No correctness check happens here.
    pub fn select_answer(&mut self, index: usize, option: impl Into<String>) {
        let within_quiz = self
            .quiz
            .as_ref()
            .is_some_and(|quiz| index < quiz.len());
        if matches!(self.screen, Screen::Results { .. }) && within_quiz {
            self.answers.insert(index, option.into());
        }
    }

    pub fn answer(&self, index: usize) -> Option<&String> {
        self.answers.get(&index)
    }

    /// Whether correct answers and correctness coloring are visible:
    /// study mode always, test mode only once submitted.
    pub fn answers_revealed(&self) -> bool {
        match &self.screen {
            Screen::Results { mode } => match mode {
                ResultsMode::Study => true,
                ResultsMode::Test { submitted } => *submitted,
            },
            _ => false,
        }
    }

    /// Count of recorded answers equal to their question's correct
    /// answer. Recomputed on demand over the whole answer set.
    pub fn score(&self) -> usize {
        let Some(quiz) = &self.quiz else {
            return 0;
        };

        self.answers
            .iter()
            .filter(|(index, chosen)| {
                quiz.question(**index)
                    .is_some_and(|mcq| &mcq.answer == *chosen)
            })
            .count()
    }

    pub fn score_summary(&self) -> String {
        let total = self.quiz.as_ref().map(Quiz::len).unwrap_or(0);
        format!("{} / {}", self.score(), total)
    }

    pub fn set_translation(&mut self, index: usize, translation: CardTranslation) {
        self.translations.insert(index, translation);
    }

    pub fn translation(&self, index: usize) -> Option<&CardTranslation> {
        self.translations.get(&index)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
