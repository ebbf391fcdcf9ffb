use std::sync::Arc;
use tracing::{debug, info};

use crate::analysis::{parse_analysis, parse_reanswer};
use crate::backend::{ChatBackend, CompletionRequest, ImagePayload};
use crate::config::PromptOverrides;
use crate::domain::{
    Difficulty, Grade, Locale, ParsedQuestion, ReanswerOutput, Subject,
};
use crate::error::ExamlensError;
use crate::prompt::{build_analyze_prompt, build_reanswer_prompt, build_similar_prompt};

/// The full round trip shared by every provider: build the prompt, call
/// the backend once, parse the reply. Stateless per call; retry and
/// backoff belong to the caller.
pub struct TutorPipeline<B: ChatBackend + ?Sized> {
    backend: Arc<B>,
    prompts: PromptOverrides,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    pub locale: Locale,
    pub subject: Option<Subject>,
    pub grade: Option<Grade>,
    pub text: Option<String>,
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Clone)]
pub struct SimilarRequest {
    pub question: String,
    pub knowledge_points: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone)]
pub struct ReanswerRequest {
    pub question: String,
    pub subject: Option<Subject>,
}

impl<B: ChatBackend + ?Sized> TutorPipeline<B> {
    pub fn new(backend: Arc<B>, prompts: PromptOverrides) -> Self {
        Self { backend, prompts }
    }

    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<ParsedQuestion, ExamlensError> {
        let prompt = build_analyze_prompt(
            request.locale,
            request.subject,
            request.grade,
            request.text.as_deref(),
            self.prompts.analyze.as_deref(),
            self.prompts.provider_hint.as_deref(),
        );
        let raw = self.complete(CompletionRequest {
            prompt,
            image: request.image.clone(),
        })?;
        let record = parse_analysis(&raw)?;
        info!(subject = %record.subject, points = record.knowledge_points.len(), "question analyzed");
        Ok(record)
    }

    pub fn generate_similar(
        &self,
        request: &SimilarRequest,
    ) -> Result<ParsedQuestion, ExamlensError> {
        let prompt = build_similar_prompt(
            &request.question,
            &request.knowledge_points,
            request.difficulty,
            self.prompts.similar.as_deref(),
            self.prompts.provider_hint.as_deref(),
        );
        let raw = self.complete(CompletionRequest::text_only(prompt))?;
        let record = parse_analysis(&raw)?;
        info!(difficulty = %request.difficulty, "similar question generated");
        Ok(record)
    }

    pub fn reanswer(&self, request: &ReanswerRequest) -> Result<ReanswerOutput, ExamlensError> {
        let prompt = build_reanswer_prompt(
            &request.question,
            request.subject,
            self.prompts.reanswer.as_deref(),
            self.prompts.provider_hint.as_deref(),
        );
        let raw = self.complete(CompletionRequest::text_only(prompt))?;
        Ok(parse_reanswer(&raw))
    }

    fn complete(&self, request: CompletionRequest) -> Result<String, ExamlensError> {
        let raw = self.backend.complete(&request)?;
        debug!(backend = self.backend.name(), bytes = raw.len(), "raw completion received");
        Ok(raw)
    }
}
