//! Gemini HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::GeminiConfig;
use crate::error::{AiError, AiResult};
use crate::prompt::build_metadata_prompt;
use crate::types::{
    AiMetadata, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GoogleSearch, Part, Schema, Tool, METADATA_FIELDS,
};

/// Anything that can look up AI metadata for a link.
///
/// The resolver depends on this seam rather than on [`GeminiClient`] so that
/// it can be exercised without a network.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    async fn lookup(&self, url: &str) -> AiResult<AiMetadata>;
}

/// Header carrying the API key. The key never goes into the request URL.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client. Fails when no API key is configured.
    pub fn new(config: GeminiConfig) -> AiResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AiError::config("GEMINI_API_KEY not set"))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> AiResult<Self> {
        Self::new(GeminiConfig::from_env())
    }

    /// Ask Gemini for the title, author, platform and summary of `url`.
    ///
    /// One request, no retries. Any transport failure, non-2xx status, empty
    /// answer or schema mismatch is returned as an error.
    pub async fn lookup_metadata(&self, url: &str) -> AiResult<AiMetadata> {
        let request = build_request(url);
        let endpoint = self.config.endpoint();

        debug!(model = %self.config.model, "Sending metadata lookup to Gemini");

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Network(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::request_failed(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let response: GenerateContentResponse = response.json().await.map_err(|e| {
            AiError::invalid_response(format!("Failed to parse Gemini response: {}", e))
        })?;

        let text = response.text().ok_or(AiError::EmptyResponse)?;
        let metadata = parse_metadata_text(&text)?;

        info!(
            platform = %metadata.platform,
            title = %metadata.title,
            "Gemini metadata lookup succeeded"
        );
        Ok(metadata)
    }
}

#[async_trait]
impl MetadataLookup for GeminiClient {
    async fn lookup(&self, url: &str) -> AiResult<AiMetadata> {
        self.lookup_metadata(url).await
    }
}

/// Build the request body for a metadata lookup.
pub fn build_request(url: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_metadata_prompt(url),
            }],
        }],
        tools: vec![Tool {
            google_search: GoogleSearch::default(),
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Schema::object_of_required_strings(&METADATA_FIELDS),
        },
    }
}

/// Decode the model's JSON answer, tolerating a Markdown code fence.
pub fn parse_metadata_text(text: &str) -> AiResult<AiMetadata> {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);

    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = GeminiClient::new(GeminiConfig::default());
        assert!(matches!(result, Err(AiError::Config(_))));
    }

    #[test]
    fn test_build_request_shape() {
        let value = serde_json::to_value(build_request("https://youtu.be/dQw4w9WgXcQ")).unwrap();

        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(value["tools"], serde_json::json!([{ "googleSearch": {} }]));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_parse_plain_json() {
        let meta = parse_metadata_text(
            r#"{"title":"Song","author":"Artist","platform":"YouTube","summary":"A song"}"#,
        )
        .unwrap();
        assert_eq!(meta.title, "Song");
        assert_eq!(meta.platform, "YouTube");
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"title\":\"T\",\"author\":\"A\",\"platform\":\"Instagram\",\"summary\":\"S\"}\n```";
        let meta = parse_metadata_text(text).unwrap();
        assert_eq!(meta.author, "A");

        let text = "```\n{\"title\":\"T\",\"author\":\"A\",\"platform\":\"Instagram\",\"summary\":\"S\"}```";
        assert!(parse_metadata_text(text).is_ok());
    }

    #[test]
    fn test_parse_rejects_schema_violations() {
        let err = parse_metadata_text(r#"{"title":"T","author":"A","platform":"YouTube"}"#)
            .unwrap_err();
        assert!(err.is_schema_violation());

        let err = parse_metadata_text("Sorry, I could not find that video.").unwrap_err();
        assert!(matches!(err, AiError::Json(_)));

        let err = parse_metadata_text(
            r#"{"title":null,"author":"A","platform":"YouTube","summary":"S"}"#,
        )
        .unwrap_err();
        assert!(err.is_schema_violation());
    }
}
