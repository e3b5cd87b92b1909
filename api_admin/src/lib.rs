use actix_web::web;

pub mod routes {
    pub mod stats;
}

pub mod services {
    pub mod stats;
}

pub mod dtos {
    pub mod stats;
}

/// Admin endpoints. Nothing here is authenticated.
pub fn mount_admin() -> actix_web::Scope {
    web::scope("/admin").service(routes::stats::get_stats)
}
