//! Backend error types surfaced inline in the admin console.

use thiserror::Error;

/// Errors from the user-management backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No backend URL or key in the environment.
    #[error("Backend not configured. Set SKORE_BACKEND_URL and SKORE_BACKEND_KEY.")]
    NotConfigured,

    /// Network or timeout failure before a response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response from the backend.
    #[error("Backend returned {code}: {body}")]
    Status { code: u16, body: String },
}

impl BackendError {
    /// One-line message for inline display in the admin panel.
    pub fn display_message(&self) -> String {
        match self {
            BackendError::NotConfigured => self.to_string(),
            BackendError::Network(e) => format!("Network error: {}", e),
            BackendError::Status { code, body } => {
                let detail = if body.is_empty() {
                    "no detail".to_string()
                } else {
                    body.chars().take(120).collect()
                };
                format!("Request failed ({}): {}", code, detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_truncated() {
        let err = BackendError::Status {
            code: 409,
            body: "x".repeat(500),
        };
        let msg = err.display_message();
        assert!(msg.starts_with("Request failed (409)"));
        assert!(msg.len() < 200);
    }

    #[test]
    fn test_not_configured_names_env_vars() {
        let msg = BackendError::NotConfigured.display_message();
        assert!(msg.contains("SKORE_BACKEND_URL"));
    }
}
