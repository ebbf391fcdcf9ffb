mod extract;
mod parser;
mod validate;

pub use extract::extract_tag;
pub use parser::{parse_analysis, parse_reanswer, split_knowledge_points};
pub use validate::{check_record, SchemaCheck};
