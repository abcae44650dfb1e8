pub mod postgres_service;
pub mod rsvp;
