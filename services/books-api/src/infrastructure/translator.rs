// Translation access
//
// Wraps the AWS Translate TranslateText call behind a trait so the
// translate handler can run against a mock.

use async_trait::async_trait;
use aws_sdk_translate::Client as TranslateClient;
use thiserror::Error;
use tracing::info;

use crate::domain::language::SOURCE_LANGUAGE_CODE;
use crate::domain::TargetLanguage;

/// Error type for translation operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslateError {
    /// AWS SDK error
    #[error("AWS Translate API error: {0}")]
    AwsSdkError(String),
}

/// Text translation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from English into the target language.
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslateError>;
}

/// Translator backed by AWS Translate.
#[derive(Debug, Clone)]
pub struct AwsTranslator {
    client: TranslateClient,
}

impl AwsTranslator {
    /// Create a new AwsTranslator.
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }

    /// Create a client from the default AWS configuration.
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = TranslateClient::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslateError> {
        info!(
            target_language = target.code(),
            text_chars = text.chars().count(),
            "calling TranslateText"
        );

        let response = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(SOURCE_LANGUAGE_CODE)
            .target_language_code(target.code())
            .send()
            .await
            .map_err(|e| TranslateError::AwsSdkError(e.into_service_error().to_string()))?;

        Ok(response.translated_text().to_string())
    }
}
