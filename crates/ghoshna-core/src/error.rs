//! Error types shared by the API client and the page controllers.

use thiserror::Error;

/// Failure of a single call against the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered 401.
    #[error("unauthorized{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },

    /// Any other non-2xx status.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided `detail` text, when there was one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True when the server was reached and answered with an error status.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Status { .. })
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// Client-side input rejection. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter text to translate")]
    EmptyText,
    #[error("Source and target languages cannot be the same")]
    SameLanguages,
    #[error("Cannot swap when source language is auto-detect")]
    SwapFromAutoDetect,
}

/// Outcome of a failed page action, returned after the failure was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("response contained no results")]
    EmptyResult,
    #[error("no stored session")]
    NoSession,
    #[error("no language selected")]
    NoLanguageSelected,
}
