mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;

use actix_governor::Governor;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::Client;

use crate::config::CONFIG;
use crate::middleware::create_api_rate_limiter_config;
use crate::repositories::{DocumentStore, MongoStore};
use crate::services::{QueryService, ReferenceService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| {
            error!("Failed to connect to MongoDB: {}", e);
            std::io::Error::other(e)
        })?;

    let mongo = MongoStore::new(&client.database(&CONFIG.database_name));
    mongo.ping().await.map_err(|e| {
        error!("Failed to ping MongoDB: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    info!("Connected to MongoDB successfully!");

    // Initialize services
    let store: Arc<dyn DocumentStore> = Arc::new(mongo);
    let query_service = web::Data::new(QueryService::new(Arc::clone(&store)));
    let reference_service = web::Data::new(ReferenceService::new(store));
    let rate_limiter = create_api_rate_limiter_config();

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&rate_limiter))
            .wrap(Logger::default())
            .app_data(query_service.clone())
            .app_data(reference_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
