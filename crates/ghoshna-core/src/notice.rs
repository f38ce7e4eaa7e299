use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class appended to `message`.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// An inline message shown next to the form that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Hide automatically after this long, if set.
    pub ttl: Option<Duration>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            ttl: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            ttl: None,
        }
    }

    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            ttl: Some(ttl),
        }
    }
}
