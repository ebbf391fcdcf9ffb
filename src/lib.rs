pub mod analysis;
pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use backend::{ChatBackend, CompletionRequest, ImagePayload, MockBackend};
pub use config::{ExamlensConfig, PromptOverrides, Provider};
pub use domain::{Difficulty, Grade, GradeBand, Locale, ParsedQuestion, ReanswerOutput, Subject};
pub use error::{classify, ExamlensError};
pub use pipeline::{AnalyzeRequest, ReanswerRequest, SimilarRequest, TutorPipeline};
