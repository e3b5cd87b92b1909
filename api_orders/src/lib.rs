use actix_web::web;

pub mod routes {
    pub mod order;
}

pub mod services {
    pub mod order;
}

pub mod dtos {
    pub mod order;
}

pub fn mount_orders() -> actix_web::Scope {
    web::scope("/orders")
        .service(routes::order::post_order)
        .service(routes::order::get_order_payments)
        .service(routes::order::get_order)
}
