use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern"));

/// Replaces every `{{name}}` in `template` with the matching variable, or
/// the empty string when no variable matches. Pure single-pass
/// substitution: a value that itself contains `{{x}}` is never re-scanned,
/// and an unresolved placeholder never survives literally.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        entries
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = render("Hello {{name}}!", &vars(&[("name", "World")]));
        assert_eq!(out, "Hello World!");
    }

    #[test]
    fn unknown_placeholder_collapses_to_empty() {
        assert_eq!(render("{{missing}}", &HashMap::new()), "");
        assert_eq!(render("a{{missing}}b", &HashMap::new()), "ab");
    }

    #[test]
    fn substituted_values_are_not_re_expanded() {
        let out = render("{{a}}", &vars(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render("{{x}} and {{x}}", &vars(&[("x", "y")]));
        assert_eq!(out, "y and y");
    }

    #[test]
    fn is_idempotent_for_identical_inputs() {
        let v = vars(&[("name", "World")]);
        assert_eq!(render("Hi {{name}}", &v), render("Hi {{name}}", &v));
    }
}
