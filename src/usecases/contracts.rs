use std::io;

use crate::domain::{member::MembersPage, private_message::PmRequest};

/// Soft failures of a single forum API call. None of them abort a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForumApiError {
    /// The forum answered with a non-2xx status.
    Status { status: u16, reason: String },
    /// The request never produced a response.
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    InvalidData(String),
}

impl std::fmt::Display for ForumApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, reason } => write!(f, "HTTP {status} {reason}"),
            Self::Transport(details) => write!(f, "transport failure: {details}"),
            Self::InvalidData(details) => write!(f, "unexpected response body: {details}"),
        }
    }
}

impl std::error::Error for ForumApiError {}

/// The forum operations the messaging workflows are built from.
pub trait ForumApi {
    fn list_members(&self, limit: usize, offset: usize) -> Result<MembersPage, ForumApiError>;

    /// `Ok(false)` for any non-2xx answer other than a rate limit.
    fn user_exists(&self, username: &str) -> Result<bool, ForumApiError>;

    fn send_private_message(
        &self,
        username: &str,
        request: &PmRequest,
    ) -> Result<(), ForumApiError>;
}

/// Yes/no question asked before resuming an interrupted bulk send.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

pub struct StdConfirm;

impl Confirm for StdConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        use std::io::Write;

        print!("{question} [y/N]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(false);
        }

        Ok(is_affirmative(&line))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
