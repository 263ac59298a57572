use actix_web::HttpResponse;

/// Error taxonomy for every service operation.
///
/// Validation failures carry a caller-facing message. `Internal` never
/// carries one: storage and object-store error text is logged at the
/// boundary where it occurs and a generic body is returned instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn conflict(msg: &str) -> Self {
        Self::Conflict(msg.to_string())
    }
    pub fn unauthorized(msg: &str) -> Self {
        Self::Unauthorized(msg.to_string())
    }
    pub fn not_found(msg: &str) -> Self {
        Self::NotFound(msg.to_string())
    }
    pub fn bad_request(msg: &str) -> Self {
        Self::BadRequest(msg.to_string())
    }
    /// Maps this error onto the equivalent HTTP response.
    pub fn respond(&self) -> HttpResponse {
        match self {
            Self::Conflict(msg) => HttpResponse::Conflict().body(msg.clone()),
            Self::Unauthorized(msg) => HttpResponse::Unauthorized().body(msg.clone()),
            Self::NotFound(msg) => HttpResponse::NotFound().body(msg.clone()),
            Self::BadRequest(msg) => HttpResponse::BadRequest().body(msg.clone()),
            Self::Internal => HttpResponse::InternalServerError().body("internal server error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::conflict("dup").respond().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::unauthorized("no").respond().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("gone").respond().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::bad_request("bad").respond().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal.respond().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
    #[test]
    fn internal_body_is_generic() {
        assert_eq!(AppError::Internal.to_string(), "internal server error");
    }
}
