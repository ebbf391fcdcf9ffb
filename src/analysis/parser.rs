use tracing::warn;

use crate::domain::{ParsedQuestion, ReanswerOutput, Subject};
use crate::error::ExamlensError;

use super::extract::extract_tag;
use super::validate::{check_record, SchemaCheck};

/// Parses a full analyze/similar reply into a [`ParsedQuestion`].
///
/// question_text, answer_text and analysis are hard requirements: if any
/// is absent the whole reply is rejected with the exact list of missing
/// tags. The remaining fields are normalized leniently, and the schema
/// check afterwards only warns.
pub fn parse_analysis(raw: &str) -> Result<ParsedQuestion, ExamlensError> {
    let mut missing: Vec<&'static str> = Vec::new();
    let mut required = |tag: &'static str| {
        extract_tag(raw, tag).unwrap_or_else(|| {
            missing.push(tag);
            String::new()
        })
    };
    let question_text = required("question_text");
    let answer_text = required("answer_text");
    let analysis = required("analysis");
    if !missing.is_empty() {
        return Err(ExamlensError::MissingFields { missing });
    }

    let subject = Subject::normalize(&extract_tag(raw, "subject").unwrap_or_default());
    let knowledge_points =
        split_knowledge_points(extract_tag(raw, "knowledge_points").as_deref());
    let requires_image = parse_requires_image(extract_tag(raw, "requires_image").as_deref());

    let record = ParsedQuestion {
        question_text,
        answer_text,
        analysis,
        subject,
        knowledge_points,
        requires_image,
    };
    if let SchemaCheck::Warnings(warnings) = check_record(&record) {
        for warning in &warnings {
            warn!(%warning, "schema check on parsed question");
        }
    }
    Ok(record)
}

/// Parses a reanswer reply. The caller already owns the question text, so
/// absent tags are tolerated and come back as empty values.
pub fn parse_reanswer(raw: &str) -> ReanswerOutput {
    ReanswerOutput {
        answer_text: extract_tag(raw, "answer_text").unwrap_or_default(),
        analysis: extract_tag(raw, "analysis").unwrap_or_default(),
        knowledge_points: split_knowledge_points(
            extract_tag(raw, "knowledge_points").as_deref(),
        ),
    }
}

/// Splits on ASCII comma, full-width comma or newline; trims each piece
/// and drops empties, preserving the emitted order.
pub fn split_knowledge_points(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw else {
        return Vec::new();
    };
    text.split(|c: char| c == ',' || c == '，' || c == '\n')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_requires_image(raw: Option<&str>) -> bool {
    raw.map(|text| text.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
