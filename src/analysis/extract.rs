/// Returns the trimmed content between `<tag>` and `</tag>` in `raw`, or
/// `None` when either delimiter is missing or they do not form a span.
///
/// The opening delimiter is matched at its first occurrence, the closing
/// one at its **last**: models routinely quote closing-tag-like text
/// inside the content and wrap the block in extra prose, and this pairing
/// keeps such replies usable. The flip side is accepted as-is: a literal
/// `</tag>` in trailing prose extends the span up to it.
pub fn extract_tag(raw: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let open_at = raw.find(&open)?;
    let close_at = raw.rfind(&close)?;
    if open_at >= close_at {
        return None;
    }
    Some(raw[open_at + open.len()..close_at].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trimmed_content() {
        let raw = "prose before <answer_text>  42  </answer_text> prose after";
        assert_eq!(extract_tag(raw, "answer_text").unwrap(), "42");
    }

    #[test]
    fn pairs_first_open_with_last_close() {
        let raw = "<analysis>uses </analysis> as an example</analysis>";
        assert_eq!(
            extract_tag(raw, "analysis").unwrap(),
            "uses </analysis> as an example"
        );
    }

    #[test]
    fn missing_delimiters_yield_none() {
        assert_eq!(extract_tag("<subject>数学", "subject"), None);
        assert_eq!(extract_tag("数学</subject>", "subject"), None);
        assert_eq!(extract_tag("no tags at all", "subject"), None);
    }

    #[test]
    fn reversed_delimiters_yield_none() {
        assert_eq!(extract_tag("</subject>数学<subject>", "subject"), None);
    }

    #[test]
    fn empty_span_is_an_empty_string() {
        assert_eq!(extract_tag("<subject></subject>", "subject").unwrap(), "");
        assert_eq!(extract_tag("<subject>   </subject>", "subject").unwrap(), "");
    }

    #[test]
    fn handles_multibyte_content() {
        let raw = "<question_text>已知 x²+1=5，求 x。</question_text>";
        assert_eq!(
            extract_tag(raw, "question_text").unwrap(),
            "已知 x²+1=5，求 x。"
        );
    }
}
