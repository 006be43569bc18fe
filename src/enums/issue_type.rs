use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Bug,
    Security,
    Performance,
    Style,
    Logic,
    BestPractice,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::Bug,
        IssueType::Security,
        IssueType::Performance,
        IssueType::Style,
        IssueType::Logic,
        IssueType::BestPractice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Style => "style",
            Self::Logic => "logic",
            Self::BestPractice => "best-practice",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = String;

    /// Lenient on case, padding and `_` vs `-`, strict on membership.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|t| t.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("'{}' is not one of bug, security, performance, style, logic, best-practice", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_and_case() {
        assert_eq!("best_practice".parse::<IssueType>().unwrap(), IssueType::BestPractice);
        assert_eq!(" Security ".parse::<IssueType>().unwrap(), IssueType::Security);
        assert!("typo".parse::<IssueType>().is_err());
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&IssueType::BestPractice).unwrap(), "\"best-practice\"");
        assert!(serde_json::from_str::<IssueType>("\"refactor\"").is_err());
    }
}
