use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    /// The server rejected the credential outright (HTTP 401). Tagged
    /// distinctly so callers can force a logout instead of retrying.
    Unauthorized(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    /// Message suitable for direct display: the server's own words for
    /// rejected requests, a generic phrasing for transport problems.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized(message) | AppError::Http { message, .. } => message.clone(),
            AppError::Timeout(message) => message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Unauthorized(message) => write!(formatter, "Unauthorized: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn unauthorized_is_tagged_distinctly() {
        let unauthorized = AppError::Unauthorized("Token expired".to_string());
        let other = AppError::Http {
            status: 400,
            message: "Bad request".to_string(),
        };

        assert!(unauthorized.is_unauthorized());
        assert!(!other.is_unauthorized());
    }

    #[test]
    fn user_message_prefers_server_wording() {
        let rejected = AppError::Http {
            status: 422,
            message: "Password must be at least 8 characters".to_string(),
        };
        assert_eq!(
            rejected.user_message(),
            "Password must be at least 8 characters"
        );

        let network = AppError::Network("connection refused".to_string());
        assert_eq!(
            network.user_message(),
            "Something went wrong. Please try again."
        );
    }
}
