use actix_web::web;

pub mod routes {
    pub mod payment;
}

pub mod services {
    pub mod payment;
}

pub mod dtos {
    pub mod payment;
}

pub fn mount_payments() -> actix_web::Scope {
    web::scope("/payments").service(routes::payment::post_payment)
}
