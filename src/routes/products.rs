use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products as product_service;
use crate::services::products::ProductsQuery;

#[get("/api/products")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::list_products(repo.get_ref(), params.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response("Failed to list products", err),
    }
}

#[get("/api/products/{id}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to get product", err),
    }
}

#[post("/api/products")]
pub async fn add_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response("Failed to create product", err),
    }
}

#[put("/api/products/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    form: web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::modify_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to update product", err),
    }
}

#[delete("/api/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::remove_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response("Failed to delete product", err),
    }
}
