use std::io;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_classifieds::models::config::ServerConfig;
use pushkind_classifieds::repository::SnapshotRepository;
use pushkind_classifieds::routes::configure;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let repo = SnapshotRepository::from_path(&server_config.snapshot_path).map_err(|e| {
        log::error!(
            "Failed to load snapshot from {}: {e}",
            server_config.snapshot_path
        );
        io::Error::other(e)
    })?;
    let repo = web::Data::new(repo);

    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .configure(configure)
    })
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
