use std::collections::HashMap;

use crate::domain::{Grade, Locale, Subject};

use super::catalogue::tag_listing;
use super::template::render;

/// Default instruction for the analyze flow. The six tags named here are
/// the wire contract the response parser extracts against.
pub const DEFAULT_ANALYZE_TEMPLATE: &str = "\
你是一名经验丰富的中小学全科教师。请仔细识别题目内容（图片或文字），完整转写并解答。
{{language_rule}}
可供选择的知识点如下：
{{tag_catalogue}}
{{question_block}}
请严格按照下面的格式输出，每个字段都用对应的标签包裹，不要输出其他内容：
<question_text>题目的完整文字内容</question_text>
<answer_text>题目的正确答案</answer_text>
<analysis>详细的解题思路和讲解</analysis>
<subject>学科名称，必须是：数学、语文、英语、物理、化学、生物、历史、地理、政治、其他 之一</subject>
<knowledge_points>本题考查的知识点，从上面的列表中选取，用逗号分隔</knowledge_points>
<requires_image>题目是否必须看图才能作答，填 true 或 false</requires_image>
{{provider_hint}}";

/// Builds the analyze prompt: language policy for `locale`, the
/// subject/grade-filtered knowledge-tag catalogue, and the question text
/// when the caller supplies one (for image-only requests the block
/// collapses to nothing).
pub fn build_analyze_prompt(
    locale: Locale,
    subject: Option<Subject>,
    grade: Option<Grade>,
    question_text: Option<&str>,
    override_template: Option<&str>,
    provider_hint: Option<&str>,
) -> String {
    let template = override_template.unwrap_or(DEFAULT_ANALYZE_TEMPLATE);
    let question_block = question_text
        .map(|text| format!("题目内容如下：\n{text}"))
        .unwrap_or_default();

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("language_rule", locale.language_rule().to_string());
    vars.insert("tag_catalogue", tag_listing(subject, grade));
    vars.insert("question_block", question_block);
    vars.insert(
        "provider_hint",
        provider_hint.unwrap_or_default().to_string(),
    );
    render(template, &vars)
}
