/// System prompt for the MCQ generation request. The per-request question
/// count and source text are appended by `build_mcq_prompt`.
pub const MCQ_GENERATOR_PROMPT: &str = "You are a quiz generation agent. Your task is to produce multiple-choice questions from the source text provided by the user.

Rules:
1. Generate EXACTLY the requested number of questions, in English.
2. Every question has EXACTLY 4 options and EXACTLY one correct answer.
3. The 'answer' field must match one of the 'options' entries verbatim, character for character.
4. Questions must be topic-relevant to the source text. Do not invent facts that are not supported by it.
5. Return ONLY a JSON array of objects with string 'question', string-array 'options', and string 'answer'. No prose, no markdown, no commentary.";

/// System prompt for the free-form translation request.
pub const TRANSLATOR_PROMPT: &str = "You are a translator. Translate the English text provided by the user to Arabic. Return only the translated text with no additional commentary.";

/// Display text substituted for a card whose translation request failed.
/// Translation is an optional enhancement; a failed item must never take
/// down the quiz.
pub const TRANSLATION_FAILURE_TEXT: &str = "[Translation unavailable]";

pub fn build_mcq_prompt(text: &str, num_questions: usize) -> String {
    format!(
        "Generate exactly {} multiple-choice questions from the following source text.\n\nSOURCE TEXT:\n{}",
        num_questions, text
    )
}
