//! Classification of remote catalog outcomes.
//!
//! Every outcome of a catalog request, successful or not, maps to exactly
//! one [`ApiError`] variant. HTTP status codes go through [`classify`];
//! failures that never produced a status go through
//! [`ApiError::from_transport`] or become [`ApiError::BadUrl`].
//!
//! # Priority
//!
//! 1. Named codes (200, 201, 204, 400, 401, 403, 404, 409, 500, 501, 503)
//! 2. Any other 4xx becomes [`ApiError::ClientError`] keeping the code
//! 3. Any other 5xx becomes [`ApiError::ServerError`] keeping the code
//! 4. Everything else is [`ApiError::Unknown`]
//!
//! The `Display` text of each variant is its user-facing message.

/// A transport failure that prevented any status code from arriving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct TransportError {
    pub description: String,
}

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Closed set of outcomes for a catalog request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request succeeded")]
    Ok,

    #[error("Resource created")]
    Created,

    #[error("Request succeeded with no content")]
    NoContent,

    #[error("Bad request")]
    BadRequest,

    #[error("Unauthorized - please sign in again")]
    UnAuthorized,

    #[error("Forbidden - you do not have access to this resource")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Conflict with the current state of the resource")]
    Conflict,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Not implemented by the server")]
    NotImplemented,

    #[error("Service unavailable - try again later")]
    ServiceUnavailable,

    #[error("Client error (HTTP {0})")]
    ClientError(i32),

    #[error("Server error (HTTP {0})")]
    ServerError(i32),

    #[error("Network error: {0}")]
    NetworkError(TransportError),

    #[error("Invalid request URL")]
    BadUrl,

    #[error("Unknown error")]
    Unknown,
}

/// Map an HTTP status code to its outcome.
pub fn classify(status_code: i32) -> ApiError {
    match status_code {
        200 => ApiError::Ok,
        201 => ApiError::Created,
        204 => ApiError::NoContent,
        400 => ApiError::BadRequest,
        401 => ApiError::UnAuthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        409 => ApiError::Conflict,
        500 => ApiError::InternalServerError,
        501 => ApiError::NotImplemented,
        503 => ApiError::ServiceUnavailable,
        400..=499 => ApiError::ClientError(status_code),
        500..=599 => ApiError::ServerError(status_code),
        _ => {
            tracing::warn!(status_code, "Unrecognized status code");
            ApiError::Unknown
        }
    }
}

impl ApiError {
    /// Outcome for a request that failed before any status arrived.
    pub fn from_transport(err: impl Into<TransportError>) -> Self {
        Self::NetworkError(err.into())
    }

    /// User-facing message for this outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether this outcome is one of the 2xx variants.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }

    /// The HTTP status this outcome stands for, if any.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            Self::Ok => Some(200),
            Self::Created => Some(201),
            Self::NoContent => Some(204),
            Self::BadRequest => Some(400),
            Self::UnAuthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Conflict => Some(409),
            Self::InternalServerError => Some(500),
            Self::NotImplemented => Some(501),
            Self::ServiceUnavailable => Some(503),
            Self::ClientError(code) | Self::ServerError(code) => Some(*code),
            Self::NetworkError(_) | Self::BadUrl | Self::Unknown => None,
        }
    }
}

impl From<reqwest::StatusCode> for ApiError {
    fn from(status: reqwest::StatusCode) -> Self {
        classify(i32::from(status.as_u16()))
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::NetworkError(err)
    }
}
