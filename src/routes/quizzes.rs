use actix_web::{HttpResponse, post, web};

use crate::forms::quizzes::QuizForm;
use crate::repository::DieselRepository;
use crate::services;
use crate::services::ServiceError;

#[post("/quizzes")]
pub async fn next_question(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<QuizForm>,
) -> Result<HttpResponse, ServiceError> {
    let body = services::quizzes::next_question(repo.get_ref(), form)?;
    Ok(HttpResponse::Ok().json(body))
}
