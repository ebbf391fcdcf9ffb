use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{classify, ExamlensError};

use super::{ChatBackend, CompletionRequest};

/// DashScope multimodal-generation backend (qwen-vl family). Same
/// capability surface as the OpenAI adapter behind a different wire
/// format: messages nest under `input`, content parts are one-key
/// objects, and the reply content is a list of text fragments.
pub struct DashScopeBackend {
    endpoint: String,
    api_key: String,
    model: String,
    http: HttpClient,
}

impl DashScopeBackend {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("could not initialize the HTTP client for DashScope")?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            http,
        })
    }
}

impl ChatBackend for DashScopeBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ExamlensError> {
        let mut content = vec![GenerationPart {
            text: Some(&request.prompt),
            image: None,
        }];
        if let Some(image) = &request.image {
            content.push(GenerationPart {
                text: None,
                image: Some(image.data_url()),
            });
        }
        let payload = GenerationRequest {
            model: &self.model,
            input: GenerationInput {
                messages: vec![GenerationMessage {
                    role: "user",
                    content,
                }],
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| classify(&err.to_string()))?;

        let body: GenerationResponse = response
            .json()
            .map_err(|err| classify(&format!("failed to parse provider payload: {err}")))?;

        if let Some(code) = body.code.filter(|code| !code.is_empty()) {
            let message = body.message.unwrap_or_default();
            return Err(classify(&format!("{code}: {message}")));
        }

        let output = body.output.ok_or_else(|| {
            ExamlensError::Response("empty response: no output field".to_string())
        })?;
        debug!(model = %self.model, choices = output.choices.len(), "generation received");

        let text: String = output
            .choices
            .into_iter()
            .next()
            .map(|choice| {
                choice
                    .message
                    .content
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(ExamlensError::Response(
                "no choices in generation payload".to_string(),
            ));
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "dashscope"
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput<'a>,
}

#[derive(Debug, Serialize)]
struct GenerationInput<'a> {
    messages: Vec<GenerationMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerationMessage<'a> {
    role: &'a str,
    content: Vec<GenerationPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerationPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    output: Option<GenerationOutput>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerationOutput {
    #[serde(default)]
    choices: Vec<GenerationChoice>,
}

#[derive(Debug, Deserialize)]
struct GenerationChoice {
    message: GenerationReplyMessage,
}

#[derive(Debug, Deserialize)]
struct GenerationReplyMessage {
    #[serde(default)]
    content: Vec<GenerationReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GenerationReplyPart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parts_serialize_single_key_objects() {
        let part = GenerationPart {
            text: Some("题目"),
            image: None,
        };
        assert_eq!(serde_json::to_string(&part).unwrap(), r#"{"text":"题目"}"#);
        let image = GenerationPart {
            text: None,
            image: Some("data:image/png;base64,eA==".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&image).unwrap(),
            r#"{"image":"data:image/png;base64,eA=="}"#
        );
    }

    #[test]
    fn reply_text_fragments_are_joined() {
        let json = r#"{
            "output": {
                "choices": [
                    {"message": {"content": [{"text": "<answer_text>"}, {"text": "42</answer_text>"}]}}
                ]
            }
        }"#;
        let body: GenerationResponse = serde_json::from_str(json).unwrap();
        let output = body.output.unwrap();
        let text: String = output.choices[0]
            .message
            .content
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        assert_eq!(text, "<answer_text>42</answer_text>");
    }
}
