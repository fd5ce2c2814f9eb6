use actix_web::{HttpResponse, get, web};

use crate::repository::DieselRepository;
use crate::services;
use crate::services::ServiceError;

#[get("/categories")]
pub async fn list_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let body = services::categories::list_categories(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(body))
}

#[get("/categories/{category_id}/questions")]
pub async fn list_category_questions(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let body =
        services::categories::list_category_questions(repo.get_ref(), category_id.into_inner())?;
    Ok(HttpResponse::Ok().json(body))
}
