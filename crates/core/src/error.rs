/// Failure taxonomy shared by every workflow.
///
/// Workflows validate exhaustively before touching the Record Store and
/// report each failure exactly once. Store-layer detail never reaches a
/// variant message: repositories log the driver error internally and
/// surface [`Error::Storage`] with a generic label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),
    /// No usable identity: missing, expired, or malformed token, or
    /// failed credentials. Deliberately carries no detail so callers
    /// cannot distinguish an unknown user from a wrong password.
    #[error("not authenticated")]
    Unauthenticated,
    /// A resolved identity denied by ownership or role rules.
    #[error("{0}")]
    Forbidden(String),
    /// Unknown resource id or slug.
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation, either caught up front or signalled by the
    /// store's constraint as the authoritative backstop.
    #[error("{0}")]
    Conflict(String),
    /// Record Store failure; the message is a generic client-safe label.
    #[error("{0}")]
    Storage(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Map to HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Storage(_) => 500,
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::Error;
    use actix_web::HttpResponse;
    use actix_web::http::StatusCode;

    impl actix_web::ResponseError for Error {
        fn status_code(&self) -> StatusCode {
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        fn error_response(&self) -> HttpResponse {
            HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "error": self.to_string() }))
        }
    }
}
