mod dashscope;
mod mock;
mod openai;

pub use dashscope::DashScopeBackend;
pub use mock::MockBackend;
pub use openai::OpenAiBackend;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ExamlensError;

/// One raw completion round trip to an LLM provider. Implementations own
/// transport and wire format; prompt construction and reply parsing stay
/// outside, identical for every provider.
pub trait ChatBackend: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ExamlensError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

impl CompletionRequest {
    pub fn text_only(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }
}

/// An image attached to an analyze request, already base64-encoded.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub media_type: String,
    pub base64_data: String,
}

impl ImagePayload {
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.into(),
            base64_data: STANDARD.encode(bytes),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_payload_builds_a_data_url() {
        let image = ImagePayload::from_bytes("image/png", b"abc");
        assert_eq!(image.data_url(), "data:image/png;base64,YWJj");
    }
}
