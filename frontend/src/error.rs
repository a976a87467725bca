use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid selector `{0}`")]
    Selector(String),
    #[error("failed to register `{0}` listener")]
    Listen(&'static str),
    #[error("localStorage is unavailable")]
    StorageUnavailable,
    #[error("failed to write `{0}` to localStorage")]
    StorageWrite(String),
    #[error("roadmap content is malformed: {0}")]
    Content(#[from] serde_json::Error),
}

/// Logs a failure with the label of whatever was running. Never rethrows.
pub fn report(context: &str, err: &UiError) {
    log::error!("Error in {}: {}", context, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        assert_eq!(UiError::Listen("click").to_string(), "failed to register `click` listener");
        assert_eq!(
            UiError::StorageWrite("theme".into()).to_string(),
            "failed to write `theme` to localStorage"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err: UiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, UiError::Content(_)));
        assert!(err.to_string().starts_with("roadmap content is malformed"));
    }
}
