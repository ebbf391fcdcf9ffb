use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{classify, ExamlensError};

use super::{ChatBackend, CompletionRequest};

/// Chat-completions backend for OpenAI and OpenAI-compatible endpoints.
/// Images travel as data-URL content parts in the user message.
pub struct OpenAiBackend {
    endpoint: String,
    api_key: String,
    model: String,
    http: HttpClient,
}

impl OpenAiBackend {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("could not initialize the HTTP client for OpenAI")?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            http,
        })
    }
}

impl ChatBackend for OpenAiBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ExamlensError> {
        let mut content = vec![ContentPart::Text {
            text: &request.prompt,
        }];
        if let Some(image) = &request.image {
            content.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_url(),
                },
            });
        }
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| classify(&err.to_string()))?;

        let body: ChatCompletionResponse = response
            .json()
            .map_err(|err| classify(&format!("failed to parse provider payload: {err}")))?;
        debug!(model = %self.model, choices = body.choices.len(), "chat completion received");

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ExamlensError::Response("no choices in completion payload".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ImagePayload;

    #[test]
    fn request_payload_matches_the_wire_shape() {
        let payload = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![RequestMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: "题目" },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: ImagePayload::from_bytes("image/png", b"x").data_url(),
                        },
                    },
                ],
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/png;base64,eA=="
        );
    }

    #[test]
    fn response_with_missing_choices_deserializes_empty() {
        let body: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(body.choices.is_empty());
    }
}
