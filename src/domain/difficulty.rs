use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier requested for a generated similar question, ordered
/// from easiest to hardest. Each tier carries a fixed instruction that is
/// interpolated verbatim into the similar-question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easier,
    Comparable,
    Harder,
    MuchHarder,
}

impl Difficulty {
    pub fn instruction(self) -> &'static str {
        match self {
            Difficulty::Easier => "新题要明显比原题容易，减少解题步骤，适合用来巩固基础",
            Difficulty::Comparable => "新题难度与原题相当，只更换情境和数值，考查相同的方法",
            Difficulty::Harder => "新题要比原题更难一些，增加一个推理环节或一个隐含条件",
            Difficulty::MuchHarder => {
                "新题要显著难于原题，需要多步推理，并综合运用多个知识点才能解出"
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easier => "easier",
            Difficulty::Comparable => "comparable",
            Difficulty::Harder => "harder",
            Difficulty::MuchHarder => "much-harder",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easier" => Ok(Difficulty::Easier),
            "comparable" => Ok(Difficulty::Comparable),
            "harder" => Ok(Difficulty::Harder),
            "much-harder" => Ok(Difficulty::MuchHarder),
            other => Err(anyhow!(
                "unknown difficulty (easier|comparable|harder|much-harder): {other}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Difficulty::Easier < Difficulty::Comparable);
        assert!(Difficulty::Harder < Difficulty::MuchHarder);
    }

    #[test]
    fn parses_kebab_names() {
        assert_eq!(
            "much-harder".parse::<Difficulty>().unwrap(),
            Difficulty::MuchHarder
        );
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
