use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories as category_service;
use crate::services::categories::CategoriesQuery;

#[get("/api/categories")]
pub async fn list_categories(
    params: web::Query<CategoriesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::list_categories(repo.get_ref(), params.into_inner()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response("Failed to list categories", err),
    }
}

#[get("/api/categories/{id}")]
pub async fn get_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::get_category(repo.get_ref(), path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response("Failed to get category", err),
    }
}

#[post("/api/categories")]
pub async fn add_category(
    form: web::Json<AddCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response("Failed to create category", err),
    }
}

#[put("/api/categories/{id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    form: web::Json<EditCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::modify_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response("Failed to update category", err),
    }
}

#[delete("/api/categories/{id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::remove_category(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response("Failed to delete category", err),
    }
}
