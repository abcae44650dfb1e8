use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldError};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::rsvp::{Pagination, RsvpListData, RsvpListQuery, RsvpListRes};
use crate::validation::parse_attendance;

pub const DEFAULT_LIMIT: u64 = 100;

#[get("")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<RsvpListQuery>,
) -> ApiResult<RsvpListRes> {
    let filter = match query.attendance.as_deref() {
        None => None,
        Some(raw) => match parse_attendance(raw) {
            Some(attendance) => Some(attendance),
            None => {
                return Err(AppError::Validation(vec![FieldError {
                    field: "attendance",
                    message: "Attendance filter must be 'attending' or 'declining'",
                }]))
            }
        },
    };
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let (rsvps, total) = db
        .list_rsvps(filter, limit, offset)
        .await
        .map_err(AppError::storage("Failed to fetch RSVPs"))?;

    let stats = db
        .rsvp_stats()
        .await
        .map_err(AppError::storage("Failed to fetch RSVPs"))?;

    Ok(ApiResponse::Ok(RsvpListRes {
        success: true,
        data: RsvpListData {
            rsvps,
            pagination: Pagination {
                total,
                limit,
                offset,
                has_more: offset.saturating_add(limit) < total,
            },
            stats,
        },
    }))
}
