use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::domain::types::CategoryId;
use crate::forms::availability::{
    AvailabilityForm, AvailabilityPayload, PostingCheckForm, PostingCheckPayload,
};
use crate::repository::SnapshotRepository;
use crate::services::ServiceError;
use crate::services::availability::{
    check_posting as check_posting_service, show_availability as show_availability_service,
};
use crate::services::categories::{
    search_categories as search_categories_service, show_category as show_category_service,
};

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().body(message)
        }
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

#[derive(Deserialize, Debug)]
struct CategorySearchParams {
    search: String,
}

#[get("/v1/categories")]
pub async fn api_v1_categories(
    params: web::Query<CategorySearchParams>,
    repo: web::Data<SnapshotRepository>,
) -> impl Responder {
    match search_categories_service(&params.search, repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}

#[get("/v1/categories/{category_id}")]
pub async fn api_v1_category(
    category_id: web::Path<String>,
    repo: web::Data<SnapshotRepository>,
) -> impl Responder {
    let category_id = match CategoryId::new(category_id.into_inner()) {
        Ok(category_id) => category_id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match show_category_service(&category_id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize, Debug)]
struct AvailabilityParams {
    #[serde(rename = "type")]
    ad_type: String,
    category: String,
}

#[get("/v1/users/{user_id}/availability")]
pub async fn api_v1_availability(
    user_id: web::Path<String>,
    params: web::Query<AvailabilityParams>,
    repo: web::Data<SnapshotRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let form = AvailabilityForm {
        user_id: user_id.into_inner(),
        ad_type: params.ad_type,
        category: params.category,
    };

    let payload = match AvailabilityPayload::try_from(form) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match show_availability_service(payload, repo.get_ref()) {
        Ok(availability) => HttpResponse::Ok().json(availability),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize, Debug)]
struct PostingCheckParams {
    #[serde(rename = "type")]
    ad_type: String,
    category_id: String,
    #[serde(default)]
    featured: bool,
}

#[get("/v1/users/{user_id}/posting-check")]
pub async fn api_v1_posting_check(
    user_id: web::Path<String>,
    params: web::Query<PostingCheckParams>,
    repo: web::Data<SnapshotRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let form = PostingCheckForm {
        user_id: user_id.into_inner(),
        ad_type: params.ad_type,
        category_id: params.category_id,
        featured: params.featured,
    };

    let payload = match PostingCheckPayload::try_from(form) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match check_posting_service(payload, repo.get_ref()) {
        Ok(check) => HttpResponse::Ok().json(check),
        Err(err) => error_response(err),
    }
}
