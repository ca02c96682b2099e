use actix_web::web;

pub mod api;

/// Register every API route under the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::api_v1_categories)
            .service(api::api_v1_category)
            .service(api::api_v1_availability)
            .service(api::api_v1_posting_check),
    );
}
