//! Session token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque backend session token with masking.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    const MIN_TOKEN_LENGTH: usize = 16;

    /// Creates a new token, rejecting obviously truncated values.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.len() < Self::MIN_TOKEN_LENGTH {
            return None;
        }
        Some(Self { value })
    }

    /// Creates a token without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns a masked form for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 8 {
            return "*".repeat(self.value.len());
        }
        format!(
            "{}...{}",
            &self.value[..4],
            &self.value[self.value.len() - 4..]
        )
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_token_rejected() {
        assert!(SessionToken::new("short").is_none());
        assert!(SessionToken::new("sess-0123456789abcdef").is_some());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::new_unchecked("sess-0123456789abcdef");
        let debug_output = format!("{token:?}");
        assert!(!debug_output.contains("0123456789abcdef"));
    }
}
