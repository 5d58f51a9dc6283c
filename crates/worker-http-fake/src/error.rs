//! Error type shared by the builder, the fakes and the serializer.

/// Errors raised while configuring a request or driving a fake.
#[derive(Debug, thiserror::Error)]
pub enum FakeError {
    #[error("Value cannot be absent (parameter '{0}')")]
    InvalidArgument(&'static str),
    #[error("{reason} (parameter '{parameter}')")]
    MalformedInput {
        parameter: &'static str,
        reason: String,
    },
    #[error("An item with the same key has already been added. Key: {0}")]
    KeyCollision(String),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FakeError {
    pub(crate) fn malformed(parameter: &'static str, reason: impl Into<String>) -> Self {
        FakeError::MalformedInput {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = FakeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_parameter() {
        let err = FakeError::InvalidArgument("url");
        assert_eq!(err.to_string(), "Value cannot be absent (parameter 'url')");
    }

    #[test]
    fn test_malformed_message() {
        let err = FakeError::malformed("url", "Url must be in a valid (absolute) format.");
        assert_eq!(
            err.to_string(),
            "Url must be in a valid (absolute) format. (parameter 'url')"
        );
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: FakeError = parse.unwrap_err().into();
        assert!(matches!(err, FakeError::Serialization(_)));
    }
}
