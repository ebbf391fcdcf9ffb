use std::collections::HashMap;

use crate::domain::Subject;

use super::template::render;

/// Default instruction for the reanswer flow. The caller already owns the
/// question text and subject, so the output contract carries only the
/// regenerated fields.
pub const DEFAULT_REANSWER_TEMPLATE: &str = "\
你是一名经验丰富的中小学全科教师。下面是一道已经核对过文字的题目，请重新解答。
{{subject_hint}}
题目：
{{question}}
请严格按照下面的格式输出，每个字段都用对应的标签包裹，不要输出其他内容：
<answer_text>题目的正确答案</answer_text>
<analysis>详细的解题思路和讲解</analysis>
<knowledge_points>本题考查的知识点，用逗号分隔</knowledge_points>
{{provider_hint}}";

pub fn build_reanswer_prompt(
    question: &str,
    subject: Option<Subject>,
    override_template: Option<&str>,
    provider_hint: Option<&str>,
) -> String {
    let template = override_template.unwrap_or(DEFAULT_REANSWER_TEMPLATE);
    let subject_hint = subject
        .map(|subject| format!("该题所属学科：{}", subject.label()))
        .unwrap_or_default();

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("question", question.to_string());
    vars.insert("subject_hint", subject_hint);
    vars.insert(
        "provider_hint",
        provider_hint.unwrap_or_default().to_string(),
    );
    render(template, &vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_omits_caller_supplied_fields() {
        let prompt = build_reanswer_prompt("计算 2+3", None, None, None);
        assert!(prompt.contains("<answer_text>"));
        assert!(prompt.contains("<analysis>"));
        assert!(prompt.contains("<knowledge_points>"));
        assert!(!prompt.contains("<question_text>"));
        assert!(!prompt.contains("<subject>"));
        assert!(!prompt.contains("<requires_image>"));
    }

    #[test]
    fn subject_hint_is_optional() {
        let with = build_reanswer_prompt("q", Some(Subject::Chemistry), None, None);
        assert!(with.contains("该题所属学科：化学"));
        let without = build_reanswer_prompt("q", None, None, None);
        assert!(!without.contains("该题所属学科"));
    }

    #[test]
    fn interpolates_question_verbatim() {
        let prompt = build_reanswer_prompt("一段\n多行题目", None, None, None);
        assert!(prompt.contains("一段\n多行题目"));
    }
}
