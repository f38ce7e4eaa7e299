//! Input rules checked before any request is sent.

use crate::error::ValidationError;
use crate::languages::AUTO_DETECT;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Length as the browser reports it for form values (UTF-16 code units).
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Checks login input, and the confirmation when `confirm` is given.
pub fn validate_credentials(
    username: &str,
    password: &str,
    confirm: Option<&str>,
) -> Result<(), ValidationError> {
    if text_length(username) < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if text_length(password) < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if let Some(confirm) = confirm {
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
    }
    Ok(())
}

/// Returns the trimmed text to send.
pub fn validate_translation<'a>(
    text: &'a str,
    source: &str,
    target: &str,
) -> Result<&'a str, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if source == target && source != AUTO_DETECT {
        return Err(ValidationError::SameLanguages);
    }
    Ok(text)
}

/// The `(source, target)` pair after a swap.
pub fn swap_languages(source: &str, target: &str) -> Result<(String, String), ValidationError> {
    if source == AUTO_DETECT {
        return Err(ValidationError::SwapFromAutoDetect);
    }
    Ok((target.to_string(), source.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Error,
}

impl CounterLevel {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Normal => "#666",
            Self::Warning => "#f39c12",
            Self::Error => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub level: CounterLevel,
}

impl CharCounter {
    pub fn new(count: usize, warn_above: usize, error_above: usize) -> Self {
        let level = if count > error_above {
            CounterLevel::Error
        } else if count > warn_above {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        Self { count, level }
    }

    pub fn label(&self) -> String {
        self.count.to_string()
    }

    pub fn color(&self) -> &'static str {
        self.level.color()
    }
}
