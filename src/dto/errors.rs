use actix_web::http::StatusCode;
use serde::Serialize;

/// Standard error body shared by every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }

    /// Body for failures produced by the routing layer itself.
    pub fn from_status(status: StatusCode) -> Self {
        let message = match status.as_u16() {
            400 => "Bad Request",
            404 => "Resource Not Found",
            405 => "Method Not Allowed",
            422 => "Unprocessable Request",
            _ => "Internal Server Error",
        };
        Self::new(status.as_u16(), message)
    }
}
