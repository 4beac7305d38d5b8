use serde::{Deserialize, Serialize};

use crate::constants::MSG_ERROR_OCCURRED;

/// Message-only envelope. Returned on delete
/// (`{"message": "Invoice deleted successfully"}`) and on every non-2xx
/// response (`{"message": "...", "error": "..."}`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusMessage {
    pub fn message_or_generic(&self) -> String {
        match &self.message {
            Some(message) => message.to_owned(),
            None => String::from(MSG_ERROR_OCCURRED),
        }
    }
}
