use anyhow::{anyhow, Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which backend adapter to instantiate. Both implement the same
/// capability surface; the choice is pure configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "dashscope")]
    DashScope,
}

impl Provider {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
            Provider::DashScope => {
                "https://dashscope.aliyuncs.com/api/v1/services/aigc/multimodal-generation/generation"
            }
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o-mini",
            Provider::DashScope => "qwen-vl-max",
        }
    }

    pub fn api_key_env(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::DashScope => "DASHSCOPE_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => f.write_str("openai"),
            Provider::DashScope => f.write_str("dashscope"),
        }
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "dashscope" => Ok(Provider::DashScope),
            other => Err(anyhow!("unknown provider (openai|dashscope): {other}")),
        }
    }
}

/// Per-flow template overrides plus the free-text provider hint. The
/// defaults live as constants in the prompt module; anything set here
/// replaces (template) or extends (hint) them verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOverrides {
    pub analyze: Option<String>,
    pub similar: Option<String>,
    pub reanswer: Option<String>,
    pub provider_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamlensConfig {
    pub provider: Provider,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub prompts: PromptOverrides,
}

impl Default for ExamlensConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: None,
            endpoint: None,
            api_key: None,
            prompts: PromptOverrides::default(),
        }
    }
}

impl ExamlensConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {path:?}"))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid config file {path:?}"))
    }

    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn resolved_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.provider.default_endpoint().to_string())
    }

    /// Explicit key first, then the generic env var, then the
    /// provider-specific one.
    pub fn resolved_api_key(&self) -> Result<String> {
        if let Some(key) = self.api_key.clone().filter(|key| !key.is_empty()) {
            return Ok(key);
        }
        std::env::var("EXAMLENS_API_KEY")
            .or_else(|_| std::env::var(self.provider.api_key_env()))
            .map_err(|_| {
                anyhow!(
                    "no api key: set api_key in the config, EXAMLENS_API_KEY, or {}",
                    self.provider.api_key_env()
                )
            })
    }
}
