use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod categories;
pub mod products;
pub mod tags;

/// Map a service failure to its HTTP response.
pub(crate) fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "message": message }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "message": "record not found" }))
        }
        ServiceError::Conflict => {
            HttpResponse::Conflict().json(json!({ "message": "conflicting record already exists" }))
        }
        ServiceError::Repository(err) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().json(json!({ "message": "internal server error" }))
        }
    }
}
