use thiserror::Error;

/// Errors raised by capture callbacks and the diagnostics around them.
///
/// A combo callback returns whatever its first failing member returned,
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallbackError {
    #[error("callback '{callback}' failed: {reason}")]
    HandlerFailed { callback: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl CallbackError {
    /// Shorthand for a handler rejecting an event.
    pub fn handler_failed(callback: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HandlerFailed {
            callback: callback.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_failed_message() {
        let err = CallbackError::handler_failed("preview", "surface gone");
        assert_eq!(err.to_string(), "callback 'preview' failed: surface gone");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            CallbackError::InvalidConfiguration("capacity".into()),
            CallbackError::InvalidConfiguration("capacity".into())
        );
        assert_ne!(
            CallbackError::handler_failed("a", "x"),
            CallbackError::handler_failed("b", "x")
        );
    }
}
