use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags as tag_service;
use crate::services::tags::TagsQuery;

#[get("/api/tags")]
pub async fn list_tags(
    params: web::Query<TagsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tag_service::list_tags(repo.get_ref(), params.into_inner()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response("Failed to list tags", err),
    }
}

#[get("/api/tags/{id}")]
pub async fn get_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match tag_service::get_tag(repo.get_ref(), path.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response("Failed to get tag", err),
    }
}

#[post("/api/tags")]
pub async fn add_tag(
    form: web::Json<AddTagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tag_service::create_tag(repo.get_ref(), form.into_inner()) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(err) => error_response("Failed to create tag", err),
    }
}

#[put("/api/tags/{id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    form: web::Json<EditTagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tag_service::modify_tag(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response("Failed to update tag", err),
    }
}

#[delete("/api/tags/{id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match tag_service::remove_tag(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response("Failed to delete tag", err),
    }
}
