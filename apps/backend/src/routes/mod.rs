use actix_web::web;

pub mod health;
pub mod rounds;

/// Register every route; `main.rs` and the integration tests share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/rounds").configure(rounds::configure_routes));
}
