use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterpretError;

/// Default upper bound on the number of questions in a result.
pub const DEFAULT_MAX_QUESTIONS: usize = 5;

/// What to do with a parsed line whose term is not in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedPolicy {
    /// Leave the line out of the result.
    #[default]
    Drop,
    /// Keep it under a generic "Other Findings" section.
    BucketAsOther,
}

impl FromStr for UnmatchedPolicy {
    type Err = InterpretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(UnmatchedPolicy::Drop),
            "bucket-as-other" => Ok(UnmatchedPolicy::BucketAsOther),
            other => Err(InterpretError::InvalidPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterpretOptions {
    pub on_unmatched: UnmatchedPolicy,
    pub max_questions: usize,
}

impl Default for InterpretOptions {
    fn default() -> Self {
        Self {
            on_unmatched: UnmatchedPolicy::Drop,
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}
