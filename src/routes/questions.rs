use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;

use crate::forms::questions::QuestionPostForm;
use crate::repository::DieselRepository;
use crate::services;
use crate::services::ServiceError;

#[derive(Debug, Deserialize)]
struct QuestionsQueryParams {
    page: Option<usize>,
}

#[get("/questions")]
pub async fn list_questions(
    params: web::Query<QuestionsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = params.page.unwrap_or(1);
    let body = services::questions::list_questions(repo.get_ref(), page)?;
    Ok(HttpResponse::Ok().json(body))
}

/// Create-or-search endpoint: a non-empty `searchTerm` selects the search
/// branch, anything else is treated as a create.
#[post("/questions")]
pub async fn post_questions(
    repo: web::Data<DieselRepository>,
    web::Json(mut form): web::Json<QuestionPostForm>,
) -> Result<HttpResponse, ServiceError> {
    match form.search_term.take().filter(|term| !term.is_empty()) {
        Some(term) => {
            let body = services::questions::search_questions(repo.get_ref(), &term)?;
            Ok(HttpResponse::Ok().json(body))
        }
        None => {
            let body = services::questions::create_question(repo.get_ref(), form)?;
            Ok(HttpResponse::Ok().json(body))
        }
    }
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    question_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let body = services::questions::delete_question(repo.get_ref(), question_id.into_inner())?;
    Ok(HttpResponse::Ok().json(body))
}
