mod appdata;
mod apis;
mod client;
mod endpoints;
mod error;
mod forms;
mod models;
mod render;
mod sessions;
mod view;

use crate::appdata::{Config, ConfigSource, AppData};
use actix_web::{HttpServer, App, web};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
pub async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Welcome to Catalogr");
    let config = match Config::read() {
        Ok(ConfigSource::Loaded(config)) => config,
        Ok(ConfigSource::DefaultWritten(path)) => {
            info!("A default configuration file has been created at '{}'. Please configure catalogr and then start it again.", path.display());
            return Ok(());
        },
        Err(err) => {
            error!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    let appdata = match AppData::new(&config) {
        Ok(appdata) => web::Data::new(appdata),
        Err(err) => {
            error!("Unable to create the catalog client: {}", err);
            std::process::exit(1);
        }
    };

    info!(catalog = %config.catalog_host, "Starting on {}", config.bind_address);
    HttpServer::new(move || {
        let cors = actix_cors::Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(appdata.clone())
            .service(crate::endpoints::page::index)
            .service(crate::endpoints::page::get_region)
            .service(crate::endpoints::search::search_keyword)
            .service(crate::endpoints::search::search_name)
            .service(crate::endpoints::add::add_product)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
