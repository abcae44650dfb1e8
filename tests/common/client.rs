use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;
use wedding_rsvp::{
    db::postgres_service::PostgresService,
    types::rsvp::DBRsvpCreate,
};
use entity::rsvp::Attendance;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(wedding_rsvp::routes::configure_routes)
    }

    /// Seeds one record through the storage layer, bypassing HTTP.
    #[allow(dead_code)]
    pub async fn seed_rsvp(&self, name: &str, attendance: Attendance, guest_count: i32) -> Uuid {
        let unique = Uuid::new_v4();
        let (id, _created_at) = self
            .db
            .create_rsvp(DBRsvpCreate {
                name: name.to_string(),
                email: format!("guest-{}@test.com", unique),
                attendance,
                guest_count,
                dietary_restrictions: None,
                message: None,
            })
            .await
            .expect("Failed to seed rsvp");
        id
    }
}
