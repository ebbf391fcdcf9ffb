use std::collections::HashMap;

use crate::domain::Difficulty;

use super::template::render;

/// Default instruction for generating a similar question. Shares the
/// six-tag output contract with the analyze flow so both replies go
/// through the same parser.
pub const DEFAULT_SIMILAR_TEMPLATE: &str = "\
你是一名经验丰富的出题老师。请根据下面的原题出一道新题。
原题：\"{{question}}\"
考查知识点：{{knowledge_points}}
难度要求：{{difficulty_rule}}。
新题必须是一道完整可解的题目，并给出答案和讲解。
请严格按照下面的格式输出，每个字段都用对应的标签包裹，不要输出其他内容：
<question_text>新题的完整题目</question_text>
<answer_text>新题的正确答案</answer_text>
<analysis>新题的解题思路和讲解</analysis>
<subject>学科名称，必须是：数学、语文、英语、物理、化学、生物、历史、地理、政治、其他 之一</subject>
<knowledge_points>新题考查的知识点，用逗号分隔</knowledge_points>
<requires_image>新题是否必须看图才能作答，填 true 或 false</requires_image>
{{provider_hint}}";

// The original question is quoted inside the template, so raw quotes and
// line breaks would break the template boundary.
fn escape_question(raw: &str) -> String {
    raw.replace('"', "\\\"").replace('\n', "\\n")
}

pub fn build_similar_prompt(
    question: &str,
    knowledge_points: &[String],
    difficulty: Difficulty,
    override_template: Option<&str>,
    provider_hint: Option<&str>,
) -> String {
    let template = override_template.unwrap_or(DEFAULT_SIMILAR_TEMPLATE);

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("question", escape_question(question));
    vars.insert("knowledge_points", knowledge_points.join(","));
    vars.insert("difficulty_rule", difficulty.instruction().to_string());
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
    fn interpolates_question_points_and_difficulty() {
        let prompt = build_similar_prompt(
            "解方程 x+1=2",
            &["一元一次方程".to_string(), "有理数".to_string()],
            Difficulty::Harder,
            None,
            None,
        );
        assert!(prompt.contains("原题：\"解方程 x+1=2\""));
        assert!(prompt.contains("一元一次方程,有理数"));
        assert!(prompt.contains(Difficulty::Harder.instruction()));
    }

    #[test]
    fn escapes_quotes_and_newlines_in_question() {
        let prompt = build_similar_prompt(
            "他说：\"你好\"\n第二行",
            &[],
            Difficulty::Comparable,
            None,
            None,
        );
        assert!(prompt.contains(r#"他说：\"你好\"\n第二行"#));
        assert!(!prompt.contains("你好\"\n第二行"));
    }

    #[test]
    fn each_tier_has_a_distinct_instruction() {
        let tiers = [
            Difficulty::Easier,
            Difficulty::Comparable,
            Difficulty::Harder,
            Difficulty::MuchHarder,
        ];
        for window in tiers.windows(2) {
            assert_ne!(window[0].instruction(), window[1].instruction());
        }
        assert!(Difficulty::MuchHarder.instruction().contains("多步推理"));
    }

    #[test]
    fn override_and_hint_pass_through() {
        let prompt = build_similar_prompt(
            "q",
            &[],
            Difficulty::Easier,
            Some("only {{question}}"),
            Some("hint"),
        );
        assert_eq!(prompt, "only q");
        let hinted = build_similar_prompt("q", &[], Difficulty::Easier, None, Some("提示"));
        assert!(hinted.ends_with("提示"));
    }
}
