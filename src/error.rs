//! Error types for the riskscout crate.
//!
//! All errors carry stable string messages suitable for display and
//! programmatic handling. No API keys or sensitive data appear in
//! error messages. Provider-level failures never reach the caller;
//! they are absorbed by the fan-out coordinator and surface only as
//! warn-level log lines.

/// Errors that can occur during research aggregation.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// Invalid aggregation configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The job title input was missing or unusable.
    #[error("invalid job title: {0}")]
    InvalidJob(String),

    /// An HTTP request to a search provider or content page failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a provider response (HTML or JSON).
    #[error("parse error: {0}")]
    Parse(String),

    /// A provider or extraction call exceeded its timeout.
    #[error("timed out: {0}")]
    Timeout(String),
}

/// Convenience type alias for riskscout results.
pub type Result<T> = std::result::Result<T, ResearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = ResearchError::Config("max_results must be > 0".into());
        assert_eq!(err.to_string(), "config error: max_results must be > 0");
    }

    #[test]
    fn display_invalid_job() {
        let err = ResearchError::InvalidJob("job title is empty".into());
        assert_eq!(err.to_string(), "invalid job title: job title is empty");
    }

    #[test]
    fn display_http() {
        let err = ResearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = ResearchError::Parse("unexpected payload shape".into());
        assert_eq!(err.to_string(), "parse error: unexpected payload shape");
    }

    #[test]
    fn display_timeout() {
        let err = ResearchError::Timeout("exceeded 5s source timeout".into());
        assert_eq!(err.to_string(), "timed out: exceeded 5s source timeout");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResearchError>();
    }
}
