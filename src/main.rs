mod config;
mod error;
mod model;
mod web;

use actix_web::{middleware, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

use config::RelayConfig;
use model::ChatModel;
use web::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Kimchee chat relay");

    let config = match RelayConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if config.api_key.is_none() {
        warn!("No API key configured; upstream calls will be sent unauthenticated");
    }

    let model = match ChatModel::new(&config) {
        Ok(model) => Data::new(model),
        Err(e) => {
            error!("Failed to build HTTP client: {:#}", e);
            std::process::exit(1);
        }
    };

    let bind = (config.host.clone(), config.port);
    info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(middleware::Logger::default())
            .app_data(model.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
