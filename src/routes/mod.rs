use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError, web};

use crate::dto::errors::ErrorBody;
use crate::services::ServiceError;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Register every API route plus the JSON 404 fallback for unknown paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_categories)
        .service(categories::list_category_questions)
        .service(questions::list_questions)
        .service(questions::post_questions)
        .service(questions::delete_question)
        .service(quizzes::next_question)
        .default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    json_status(StatusCode::NOT_FOUND)
}

fn json_status(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::from_status(status))
}

/// Rewrite routing-layer failures (405 from method guards) into the
/// standard error body.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::METHOD_NOT_ALLOWED, render_json_error)
}

fn render_json_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, res) = res.into_parts();
    let response = json_status(res.status());
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

/// Malformed JSON bodies map to the standard 400 body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ServiceError::BadRequest.error_response(),
        )
        .into()
    })
}

/// Non-numeric `page` query values are rejected with a 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ServiceError::BadRequest.error_response(),
        )
        .into()
    })
}

/// A non-numeric id segment behaves like an unknown route (404), matching
/// the integer path converters of the original API.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ServiceError::NotFound.error_response(),
        )
        .into()
    })
}
