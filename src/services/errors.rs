use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::dto::errors::ErrorBody;

/// Typed failure for service layer operations.
///
/// Every operation boundary returns one of these variants; the mapping to an
/// HTTP response happens once, through [`ResponseError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Required fields were missing from the request payload.
    #[error("Bad Request")]
    BadRequest,
    /// The requested resource does not exist, or a page past the end of the
    /// data was asked for.
    #[error("Resource Not Found")]
    NotFound,
    /// The request was well-formed but could not be processed.
    #[error("Unprocessable Request")]
    Unprocessable,
    /// An unexpected internal error occurred.
    #[error("Internal Server Error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(
            self.status_code().as_u16(),
            self.to_string(),
        ))
    }
}
