use std::error::Error;

use actix_web::{middleware::Logger, App, HttpServer};
use log::info;
use riskscore_api::config::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(riskscore_api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
