//! [`Description`], the renderable result of applying or undoing an action.
//!
//! The timeline core treats descriptions as inert payloads: it produces
//! them and hands them back to the host, which owns presentation (text
//! templates, translation, UI). The one distinction the core itself makes
//! is plain versus error, because effect-application failures are reported
//! through an error-kind description instead of a propagated fault.

use serde::{Deserialize, Serialize};

/// A renderable action result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Description {
    /// A successful effect application, described for the host.
    Plain(String),
    /// A failed effect application. The effect was not applied; the text
    /// says why.
    Error(String),
}

impl Description {
    /// Build a plain description from anything displayable.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Build an error-kind description from anything displayable.
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    /// Whether this description reports a failed effect application.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The description text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Error(text) => text,
        }
    }
}

impl core::fmt::Display for Description {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_not_error() {
        let d = Description::plain("healed 10");
        assert!(!d.is_error());
        assert_eq!(d.text(), "healed 10");
    }

    #[test]
    fn error_is_error() {
        let d = Description::error("no such creature");
        assert!(d.is_error());
        assert_eq!(d.to_string(), "no such creature");
    }
}
