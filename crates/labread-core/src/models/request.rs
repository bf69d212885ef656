use serde::Deserialize;
use ts_rs::TS;

use super::level::Level;
use crate::error::CoreError;

/// Request body as received at the transport boundary.
///
/// Fields are optional here so that missing values surface as
/// [`CoreError`] validation failures instead of deserialization errors.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimplifyRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub use_narrative: Option<bool>,
}

/// A validated request, ready for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInput {
    pub text: String,
    pub level: Level,
    pub use_narrative: bool,
}

impl SimplifyRequest {
    /// Check required fields and the optional size cap.
    ///
    /// A missing level defaults to [`Level::Standard`]; an unrecognised one
    /// is rejected.
    pub fn validate(self, max_text_bytes: Option<usize>) -> Result<ReportInput, CoreError> {
        let text = match self.text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(CoreError::MissingText),
        };

        if let Some(max) = max_text_bytes
            && text.len() > max
        {
            return Err(CoreError::InputTooLarge {
                len: text.len(),
                max,
            });
        }

        let level = match self.level.as_deref() {
            None => Level::default(),
            Some(raw) => raw.parse()?,
        };

        Ok(ReportInput {
            text,
            level,
            use_narrative: self.use_narrative.unwrap_or(false),
        })
    }
}
