use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::rsvp::{RRsvpSubmit, RsvpCreated, RsvpSubmitRes};
use crate::validation::validate_submission;

#[post("")]
async fn submit(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRsvpSubmit>,
) -> ApiResult<RsvpSubmitRes> {
    let payload = validate_submission(&body).map_err(AppError::Validation)?;

    let (id, created_at) = db
        .create_rsvp(payload)
        .await
        .map_err(AppError::storage(
            "Failed to submit RSVP. Please try again later.",
        ))?;

    info!(%id, "rsvp recorded");

    Ok(ApiResponse::Created(RsvpSubmitRes {
        success: true,
        message: "RSVP submitted successfully",
        data: RsvpCreated { id, created_at },
    }))
}
