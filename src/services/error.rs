use thiserror::Error;

/// Fallos de una llamada al backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is what the server said, when it said anything.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_server_message() {
        let err = ApiError::Rejected { status: 401, message: Some("Bad credentials".into()) };
        assert_eq!(err.to_string(), "HTTP 401: Bad credentials");
        assert_eq!(err.server_message(), Some("Bad credentials"));

        let err = ApiError::Rejected { status: 500, message: None };
        assert_eq!(err.to_string(), "HTTP 500: request rejected");
        assert_eq!(ApiError::Network("refused".into()).server_message(), None);
    }
}
