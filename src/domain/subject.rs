use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of subjects a question can be classified into.
/// `Other` is the catch-all used whenever the model's answer does not
/// exactly match one of the ten labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "数学")]
    Math,
    #[serde(rename = "语文")]
    Chinese,
    #[serde(rename = "英语")]
    English,
    #[serde(rename = "物理")]
    Physics,
    #[serde(rename = "化学")]
    Chemistry,
    #[serde(rename = "生物")]
    Biology,
    #[serde(rename = "历史")]
    History,
    #[serde(rename = "地理")]
    Geography,
    #[serde(rename = "政治")]
    Politics,
    #[serde(rename = "其他")]
    Other,
}

impl Subject {
    pub fn all() -> &'static [Subject] {
        &[
            Subject::Math,
            Subject::Chinese,
            Subject::English,
            Subject::Physics,
            Subject::Chemistry,
            Subject::Biology,
            Subject::History,
            Subject::Geography,
            Subject::Politics,
            Subject::Other,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "数学",
            Subject::Chinese => "语文",
            Subject::English => "英语",
            Subject::Physics => "物理",
            Subject::Chemistry => "化学",
            Subject::Biology => "生物",
            Subject::History => "历史",
            Subject::Geography => "地理",
            Subject::Politics => "政治",
            Subject::Other => "其他",
        }
    }

    /// Exact match against one of the ten labels, otherwise the catch-all.
    pub fn normalize(raw: &str) -> Subject {
        Subject::all()
            .iter()
            .copied()
            .find(|subject| subject.label() == raw)
            .unwrap_or(Subject::Other)
    }
}

impl Default for Subject {
    fn default() -> Self {
        Subject::Other
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ascii = match s {
            "math" => Some(Subject::Math),
            "chinese" => Some(Subject::Chinese),
            "english" => Some(Subject::English),
            "physics" => Some(Subject::Physics),
            "chemistry" => Some(Subject::Chemistry),
            "biology" => Some(Subject::Biology),
            "history" => Some(Subject::History),
            "geography" => Some(Subject::Geography),
            "politics" => Some(Subject::Politics),
            "other" => Some(Subject::Other),
            _ => None,
        };
        if let Some(subject) = ascii {
            return Ok(subject);
        }
        Subject::all()
            .iter()
            .copied()
            .find(|subject| subject.label() == s)
            .ok_or_else(|| anyhow!("unknown subject: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_exact_label() {
        assert_eq!(Subject::normalize("物理"), Subject::Physics);
        assert_eq!(Subject::normalize("数学"), Subject::Math);
    }

    #[test]
    fn normalize_falls_back_to_catch_all() {
        assert_eq!(Subject::normalize("天文"), Subject::Other);
        assert_eq!(Subject::normalize(""), Subject::Other);
        assert_eq!(Subject::normalize("数学 "), Subject::Other);
    }

    #[test]
    fn from_str_accepts_ascii_and_label() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("化学".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert!("klingon".parse::<Subject>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Subject::Biology).unwrap();
        assert_eq!(json, "\"生物\"");
    }
}
