use crate::domain::{ParsedQuestion, Subject};

/// Outcome of the advisory schema check. Warnings never reject a record;
/// the parser logs them and returns the best-effort data anyway. The only
/// hard gate is the required-tags check in the parser itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaCheck {
    Valid,
    Warnings(Vec<String>),
}

pub fn check_record(record: &ParsedQuestion) -> SchemaCheck {
    let mut warnings = Vec::new();
    if record.knowledge_points.is_empty() {
        warnings.push("knowledge_points is empty".to_string());
    }
    if record.subject == Subject::Other {
        warnings.push("subject fell back to the catch-all value".to_string());
    }
    if record.question_text.chars().count() < 2 {
        warnings.push("question_text is implausibly short".to_string());
    }
    if warnings.is_empty() {
        SchemaCheck::Valid
    } else {
        SchemaCheck::Warnings(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ParsedQuestion {
        ParsedQuestion {
            question_text: "解方程 x+1=2".to_string(),
            answer_text: "x=1".to_string(),
            analysis: "移项即可".to_string(),
            subject: Subject::Math,
            knowledge_points: vec!["一元一次方程".to_string()],
            requires_image: false,
        }
    }

    #[test]
    fn complete_record_is_valid() {
        assert_eq!(check_record(&record()), SchemaCheck::Valid);
    }

    #[test]
    fn warnings_accumulate_without_rejecting() {
        let mut incomplete = record();
        incomplete.knowledge_points.clear();
        incomplete.subject = Subject::Other;
        match check_record(&incomplete) {
            SchemaCheck::Warnings(warnings) => assert_eq!(warnings.len(), 2),
            SchemaCheck::Valid => panic!("expected warnings"),
        }
    }
}
