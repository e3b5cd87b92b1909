use std::sync::Arc;

use actix_web::web;
use common::{clock::SharedClock, env_config::Config, http::json_config, ids::SharedIds};
use sqlx::SqlitePool;

pub mod cors;

/// Everything the handlers receive through app data.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub config: Arc<Config>,
    pub ids: SharedIds,
    pub clock: SharedClock,
}

impl AppState {
    /// Registers app data and mounts the `/api` routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.pool.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.ids.clone()))
            .app_data(web::Data::new(self.clock.clone()))
            .app_data(json_config())
            .service(
                web::scope("/api")
                    .service(api_orders::mount_orders())
                    .service(api_payments::mount_payments())
                    .service(api_admin::mount_admin()),
            );
    }
}
