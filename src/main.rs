mod config;
mod errors;
mod models;
mod routes;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::AppConfig;
use std::fs;

const PUBLIC_DIR: &str = "public";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = AppConfig::from_env();
    let host = cfg.host.clone();
    let port = cfg.port;

    // The upload directory is the whole durable state; make sure it exists
    // before accepting requests. Idempotent.
    fs::create_dir_all(&cfg.upload_dir)?;

    log::info!("FileStore running at http://{}:{}", host, port);

    let cfg_data = cfg.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(cfg_data.clone()))
            .configure(routes::configure)
            .service(Files::new("/uploads", cfg_data.upload_dir.clone()))
            .service(Files::new("/", PUBLIC_DIR).index_file("index.html"))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
