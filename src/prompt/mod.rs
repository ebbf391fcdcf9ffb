mod analyze;
mod catalogue;
mod reanswer;
mod similar;
mod template;

pub use analyze::{build_analyze_prompt, DEFAULT_ANALYZE_TEMPLATE};
pub use catalogue::{math_tags, subject_tags, tag_listing};
pub use reanswer::{build_reanswer_prompt, DEFAULT_REANSWER_TEMPLATE};
pub use similar::{build_similar_prompt, DEFAULT_SIMILAR_TEMPLATE};
pub use template::render;
