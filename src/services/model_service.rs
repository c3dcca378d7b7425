use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use futures::future::join_all;
use schemars::schema_for;
use serde_json::{json, Value};

use crate::config::{ApiCredential, Config};
use crate::constants::prompts::{
    build_mcq_prompt, MCQ_GENERATOR_PROMPT, TRANSLATION_FAILURE_TEXT, TRANSLATOR_PROMPT,
};
use crate::errors::{AppError, AppResult};
use crate::models::domain::{CardTranslation, Mcq};

/// Boundary to the hosted text-generation model. One structured call
/// carries a prompt plus a strict JSON response schema; the other is a
/// free-form prompt returning raw text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: Value,
    ) -> AppResult<String>;

    async fn generate_text(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

/// Chat-completions implementation of [`TextModel`].
///
/// The credential is injected at construction; its absence is detected
/// here, before any network call, and reported as a credential error
/// distinct from ordinary generation failures.
pub struct OpenAiTextModel {
    credential: Option<ApiCredential>,
    model_name: String,
}

impl OpenAiTextModel {
    pub fn new(credential: Option<ApiCredential>, model_name: impl Into<String>) -> Self {
        Self {
            credential,
            model_name: model_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.credential().ok(), config.model_name.clone())
    }

    fn client(&self) -> AppResult<Client<OpenAIConfig>> {
        let credential = self.credential.as_ref().ok_or_else(|| {
            AppError::Credential(
                "OPENAI_API_KEY is not set; export it or add it to .env".to_string(),
            )
        })?;

        let config = OpenAIConfig::new().with_api_key(credential.expose());
        Ok(Client::with_config(config))
    }

    async fn chat(&self, payload: Value) -> AppResult<String> {
        let client = self.client()?;

        let response: Value = client.chat().create_byot(payload).await.map_err(|err| {
            log::error!("model call failed: {}", err);
            AppError::Generation
        })?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                log::error!("model response carried no message content");
                AppError::Generation
            })
    }
}

#[async_trait]
impl TextModel for OpenAiTextModel {
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: Value,
    ) -> AppResult<String> {
        let payload = json!({
            "model": self.model_name,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": schema_name,
                    "schema": schema,
                    "strict": true
                }
            }
        });

        self.chat(payload).await
    }

    async fn generate_text(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let payload = json!({
            "model": self.model_name,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ]
        });

        self.chat(payload).await
    }
}

/// The AI gateway: formats generation and translation requests and
/// validates/normalizes what comes back.
pub struct ModelService {
    model: Arc<dyn TextModel>,
}

impl ModelService {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Ask the model for `num_questions` MCQs grounded in `text`.
    ///
    /// The returned sequence keeps only records satisfying the filter
    /// invariant (non-empty question, non-empty options, answer equal to
    /// one option verbatim) and may legitimately be shorter than
    /// requested.
    pub async fn generate_mcqs(&self, text: &str, num_questions: usize) -> AppResult<Vec<Mcq>> {
        let schema = serde_json::to_value(schema_for!(Vec<Mcq>)).map_err(|err| {
            log::error!("failed to build MCQ response schema: {}", err);
            AppError::Generation
        })?;

        let raw = self
            .model
            .generate_structured(
                MCQ_GENERATOR_PROMPT,
                &build_mcq_prompt(text, num_questions),
                "mcq_list",
                schema,
            )
            .await?;

        parse_mcq_response(&raw)
    }

    /// Translate English text to Arabic.
    ///
    /// Empty input short-circuits without a network call. Any failure
    /// other than a missing credential degrades to the sentinel failure
    /// string, so translation never interrupts the quiz flow.
    pub async fn translate_text(&self, text: &str) -> AppResult<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        match self.model.generate_text(TRANSLATOR_PROMPT, text).await {
            Ok(translated) => Ok(translated.trim().to_string()),
            Err(err @ AppError::Credential(_)) => Err(err),
            Err(err) => {
                log::warn!("translation degraded to sentinel: {}", err);
                Ok(TRANSLATION_FAILURE_TEXT.to_string())
            }
        }
    }

    /// Translate a question and its options as one indexed batch of
    /// concurrent requests. Results are zipped back by submission index,
    /// not completion order. A failed item degrades only itself; a
    /// credential failure aborts the whole batch.
    pub async fn translate_card(
        &self,
        question: &str,
        options: &[String],
    ) -> AppResult<CardTranslation> {
        let mut requests = Vec::with_capacity(options.len() + 1);
        requests.push(question.to_string());
        requests.extend(options.iter().cloned());

        let indexed = requests
            .iter()
            .enumerate()
            .map(|(index, text)| async move { (index, self.translate_text(text).await) });

        let mut slots: Vec<String> = vec![String::new(); requests.len()];
        for (index, result) in join_all(indexed).await {
            slots[index] = result?;
        }

        let question = slots.remove(0);
        Ok(CardTranslation {
            question,
            options: slots,
        })
    }
}

/// Parse and filter the model's JSON text per the output contract: a
/// non-array top level is a schema error; individual malformed records
/// are silently dropped.
fn parse_mcq_response(raw: &str) -> AppResult<Vec<Mcq>> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|err| {
        log::error!("model returned unparseable JSON: {}", err);
        AppError::Generation
    })?;

    let Value::Array(items) = value else {
        return Err(AppError::Schema(format!(
            "expected a JSON array at the top level, got {}",
            json_type_name(&value)
        )));
    };

    let total = items.len();
    let mcqs: Vec<Mcq> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Mcq>(item).ok())
        .filter(Mcq::is_valid)
        .collect();

    if mcqs.len() < total {
        log::warn!("dropped {} malformed MCQ record(s)", total - mcqs.len());
    }

    Ok(mcqs)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
