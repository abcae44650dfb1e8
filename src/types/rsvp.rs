use chrono::{DateTime, Utc};
use entity::rsvp::{Attendance, Model as RsvpModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw submission body. Everything is optional at the serde layer so that
/// `validation::validate_submission` can report all failing fields in one
/// pass instead of dying on the first missing one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RRsvpSubmit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub attendance: Option<String>,
    pub guest_count: Option<i32>,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation, normalized for storage.
/// Blank optional text has already been collapsed to `None` here.
#[derive(Debug, Clone, PartialEq)]
pub struct DBRsvpCreate {
    pub name: String,
    pub email: String,
    pub attendance: Attendance,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpCreated {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct RsvpSubmitRes {
    pub success: bool,
    pub message: &'static str,
    pub data: RsvpCreated,
}

#[derive(Debug, Deserialize)]
pub struct RsvpListQuery {
    pub attendance: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub has_more: bool,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStats {
    pub attending: i64,
    pub declining: i64,
    /// Sum of guest_count over attending records only.
    pub total_guests: i64,
}

#[derive(Serialize)]
pub struct RsvpListData {
    pub rsvps: Vec<RsvpModel>,
    pub pagination: Pagination,
    pub stats: RsvpStats,
}

#[derive(Serialize)]
pub struct RsvpListRes {
    pub success: bool,
    pub data: RsvpListData,
}
