use crate::domain::model::FALLBACK_FAILURE_MESSAGE;
use thiserror::Error;

/// Why a submission attempt failed. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{message}")]
    Network { message: String },

    #[error("{}", .detail.as_deref().unwrap_or(FALLBACK_FAILURE_MESSAGE))]
    Rejected { status: u16, detail: Option<String> },

    #[error("{message}")]
    ResponseParse { message: String },
}

impl ContactError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContactError::Network { .. } => "network",
            ContactError::Rejected { .. } => "rejected",
            ContactError::ResponseParse { .. } => "parse",
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        ContactError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        ContactError::ResponseParse {
            message: err.to_string(),
        }
    }
}
