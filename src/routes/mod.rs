use actix_web::web;

pub mod health;
pub mod rsvp;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/rsvp")
            .service(rsvp::submit::submit)
            .service(rsvp::list::list),
    );
}
