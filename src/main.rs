use std::process;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use forum_be::config::ServerConfig;
use forum_be::{AppState, configure};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            process::exit(1);
        }
    };

    let state = web::Data::new(AppState::default());
    let allowed_origins = config.allowed_origins.clone();
    let bind_address = config.bind_address();

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept", "x-requested-with"])
            .max_age(3600);

        if allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        }
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .shutdown_timeout(config.shutdown_timeout_secs)
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Shutting down server gracefully.");
    Ok(())
}
