//! Private message content and where its body comes from.

use std::path::PathBuf;

/// Where the PM body is taken from on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Inline(String),
    File(PathBuf),
}

/// Title and raw markdown body of a private message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PmRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmRequestError {
    EmptyTitle,
    EmptyBody,
}

impl std::fmt::Display for PmRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("title must not be empty"),
            Self::EmptyBody => f.write_str("message body must not be empty"),
        }
    }
}

impl PmRequest {
    /// Builds a request, rejecting a blank title or body. The body is kept
    /// verbatim; only the title is trimmed.
    pub fn new(title: &str, body: String) -> Result<Self, PmRequestError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PmRequestError::EmptyTitle);
        }

        if body.trim().is_empty() {
            return Err(PmRequestError::EmptyBody);
        }

        Ok(Self {
            title: title.to_owned(),
            body,
        })
    }
}
