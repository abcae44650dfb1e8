use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use wedding_rsvp::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_rsvp() -> Value {
        json!({
            "name": "Avery Quinn",
            "email": "avery@example.com",
            "attendance": "attending",
            "guestCount": 2,
            "dietaryRestrictions": "vegetarian",
            "message": "So excited for you both!"
        })
    }

    pub fn attending_rsvp(name: &str, email: &str, guest_count: i32) -> Value {
        json!({
            "name": name,
            "email": email,
            "attendance": "attending",
            "guestCount": guest_count,
        })
    }

    pub fn declining_rsvp(name: &str, email: &str) -> Value {
        json!({
            "name": name,
            "email": email,
            "attendance": "declining",
        })
    }
}
