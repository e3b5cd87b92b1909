use std::sync::Arc;

use actix_web::{App, HttpServer};
use checkout::{AppState, cors};
use common::{clock::SystemClock, env_config::Config, ids::UuidIds};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();

    // init logger
    let console_logging_enabled = config.console_logging_enabled;
    if console_logging_enabled {
        let level = if config.is_production() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Debug
        };
        logger::setup(&config.log_file, level).expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url)
        .await
        .expect("Failed to set up database");

    let state = AppState {
        pool,
        config: config.clone(),
        ids: Arc::new(UuidIds),
        clock: Arc::new(SystemClock),
    };
    let origin = config.cors_allowed_origin.clone();

    log::info!(
        "Server running on http://{}:{} (payment status policy: {})",
        config.server_host,
        config.server_port,
        config.payment_status_policy
    );

    let server_state = state.clone();
    HttpServer::new(move || {
        let state = server_state.clone();
        App::new()
            .wrap(logger::middleware(console_logging_enabled))
            .wrap(cors::middleware(&origin))
            .configure(|cfg| state.configure(cfg))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await?;

    db::close(&state.pool).await;
    Ok(())
}
