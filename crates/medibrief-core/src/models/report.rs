use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::template::ReportTemplate;
use super::usage::TokenUsage;

/// The unprocessed text returned by the model.
///
/// Immutable once produced; the block sequence is derived from it afresh on
/// every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RawReportText(String);

impl RawReportText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RawReportText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for RawReportText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawReportText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A report produced by one generation request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedReport {
    pub id: Uuid,
    pub template: ReportTemplate,
    pub model_id: String,
    pub text: RawReportText,
    /// Image parts sent alongside the prompt.
    pub attachment_count: usize,
    pub usage: TokenUsage,
    pub created_at: jiff::Timestamp,
}
