//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    /// Card content that cannot be laid out (e.g. duplicate card ids).
    #[error("content error: {0}")]
    Content(String),

    #[error("server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("missing field".into());
        assert!(e.to_string().contains("config error"));
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn content_error_display() {
        let e = AppError::Content("duplicate card id 'p1'".into());
        assert!(e.to_string().contains("duplicate card id 'p1'"));
    }

    #[test]
    fn server_error_display() {
        let e = AppError::Server("bind failed".into());
        assert!(e.to_string().starts_with("server error"));
    }
}
