use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use product_catalog::db::establish_connection_pool;
use product_catalog::repository::DieselRepository;
use product_catalog::routes::categories::{
    add_category, delete_category, edit_category, get_category, list_categories,
};
use product_catalog::routes::products::{
    add_product, delete_product, edit_product, get_product, list_products,
};
use product_catalog::routes::tags::{add_tag, delete_tag, edit_tag, get_tag, list_tags};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("catalog.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_categories)
            .service(get_category)
            .service(add_category)
            .service(edit_category)
            .service(delete_category)
            .service(list_tags)
            .service(get_tag)
            .service(add_tag)
            .service(edit_tag)
            .service(delete_tag)
            .service(list_products)
            .service(get_product)
            .service(add_product)
            .service(edit_product)
            .service(delete_product)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
