use crate::strings::DICODING_REWARD;
use serde::Serialize;

pub const MIME_TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareAction {
    /// Hand a piece of text to another application.
    SendText,
}

/// Request handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub action: ShareAction,
    pub mime_type: String,
    pub subject: String,
    pub body: String,
}

impl ShareRequest {
    /// Plain-text share of an order summary. The summary is passed through
    /// untouched, empty or not.
    pub fn order_summary(summary: &str) -> Self {
        Self {
            action: ShareAction::SendText,
            mime_type: MIME_TEXT_PLAIN.to_string(),
            subject: DICODING_REWARD.to_string(),
            body: summary.to_string(),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        self.action == ShareAction::SendText && self.mime_type == MIME_TEXT_PLAIN
    }
}
