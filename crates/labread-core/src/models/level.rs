use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Reading register used when composing explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Level {
    /// Plain adult language.
    #[default]
    Standard,
    /// Simplified vocabulary for younger readers.
    Child,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Standard => "standard",
            Level::Child => "child",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Level::Standard),
            "child" => Ok(Level::Child),
            other => Err(CoreError::InvalidLevel(other.to_string())),
        }
    }
}
