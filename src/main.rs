use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};

use trivia_api::db::establish_connection_pool;
use trivia_api::models::config::ServerConfig;
use trivia_api::repository::DieselRepository;
use trivia_api::routes;

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "PUT", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = ServerConfig::load().map_err(|e| std::io::Error::other(e.to_string()))?;

    let pool = establish_connection_pool(&config.database_url)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting trivia API server on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(routes::path_config())
            .configure(routes::configure)
            .wrap(routes::error_handlers())
            .wrap(cors())
            .wrap(middleware::Logger::default())
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
