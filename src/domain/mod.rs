mod difficulty;
mod grade;
mod locale;
mod question;
mod subject;

pub use difficulty::Difficulty;
pub use grade::{Grade, GradeBand};
pub use locale::Locale;
pub use question::{ParsedQuestion, ReanswerOutput};
pub use subject::Subject;
