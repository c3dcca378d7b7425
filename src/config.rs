use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::errors::{AppError, AppResult};

/// Secret used to authorize calls to the hosted text model.
///
/// Constructed once and injected into the model client, so tests can pass
/// a fake without touching process-wide environment state.
#[derive(Clone, Debug)]
pub struct ApiCredential(SecretString);

impl ApiCredential {
    pub fn new(secret: impl Into<String>) -> AppResult<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AppError::Credential(
                "API key is empty; set OPENAI_API_KEY".to_string(),
            ));
        }
        Ok(Self(SecretString::from(secret)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub model_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: env::var("OPENAI_API_KEY").ok().map(SecretString::from),
            model_name: env::var("QUIZFORGE_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }

    /// Resolve the credential, failing fast with an actionable error when
    /// the key is absent. Callers check this before any network call.
    pub fn credential(&self) -> AppResult<ApiCredential> {
        match &self.api_key {
            Some(key) => ApiCredential::new(key.expose_secret().to_string()),
            None => Err(AppError::Credential(
                "OPENAI_API_KEY is not set; export it or add it to .env".to_string(),
            )),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: Some(SecretString::from("test_api_key".to_string())),
            model_name: "gpt-4o-mini".to_string(),
        }
    }
}
