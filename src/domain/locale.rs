use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output-language policy for the analyze flow.
///
/// `Zh` keeps the explanation in Chinese no matter what language the
/// question itself uses, while question and answer echo the original
/// language. `En` forces every field into English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    pub fn language_rule(self) -> &'static str {
        match self {
            Locale::Zh => {
                "无论题目本身使用什么语言，<analysis> 一律用中文撰写；\
                 <question_text> 和 <answer_text> 保持题目原文的语言。"
            }
            Locale::En => {
                "Write every field in English, including the analysis, \
                 regardless of the language the question uses."
            }
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Zh
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Zh => f.write_str("zh"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            other => Err(anyhow!("unknown locale (zh|en): {other}")),
        }
    }
}
