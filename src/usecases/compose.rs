use std::fs;

use crate::{
    domain::private_message::{MessageSource, PmRequest},
    infra::error::AppError,
};

/// Resolves the PM body from its source and validates the result. Runs
/// before any network activity so a bad message aborts the whole run.
pub fn compose_request(title: &str, source: MessageSource) -> Result<PmRequest, AppError> {
    let body = match source {
        MessageSource::Inline(body) => body,
        MessageSource::File(path) => {
            if !path.is_file() {
                return Err(AppError::MessageFileMissing { path });
            }
            fs::read_to_string(&path)
                .map_err(|source| AppError::MessageFileRead { path, source })?
        }
    };

    PmRequest::new(title, body).map_err(|error| AppError::InvalidMessage {
        details: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn inline_body_is_used_as_is() {
        let request = compose_request("Notice", MessageSource::Inline("Hello".to_owned()))
            .expect("request should compose");

        assert_eq!(request.body, "Hello");
    }

    #[test]
    fn file_body_is_read_in_full() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("message.md");
        fs::write(&path, "Line one\n\nLine two\n").expect("fixture should be writable");

        let request =
            compose_request("Notice", MessageSource::File(path)).expect("request should compose");

        assert_eq!(request.body, "Line one\n\nLine two\n");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = compose_request(
            "Notice",
            MessageSource::File(PathBuf::from("./no-such-message.md")),
        )
        .expect_err("must fail");

        assert!(matches!(err, AppError::MessageFileMissing { .. }));
    }

    #[test]
    fn empty_body_is_rejected() {
        let err =
            compose_request("Notice", MessageSource::Inline(String::new())).expect_err("must fail");

        assert!(matches!(err, AppError::InvalidMessage { .. }));
    }
}
