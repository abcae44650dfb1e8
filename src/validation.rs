use entity::rsvp::Attendance;

use crate::types::error::FieldError;
use crate::types::rsvp::{DBRsvpCreate, RRsvpSubmit};

pub const DEFAULT_GUEST_COUNT: i32 = 1;

const NAME_MAX: usize = 200;
const EMAIL_MAX: usize = 200;
const DIETARY_MAX: usize = 500;
const MESSAGE_MAX: usize = 1000;
const GUEST_MIN: i32 = 1;
const GUEST_MAX: i32 = 10;

pub fn parse_attendance(value: &str) -> Option<Attendance> {
    match value {
        "attending" => Some(Attendance::Attending),
        "declining" => Some(Attendance::Declining),
        _ => None,
    }
}

/// Structural check only: one `@`, a non-empty local part, a dotted
/// domain, no whitespace.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Single-pass submission check: every failing field is collected so the
/// response can name them all, never just the first.
pub fn validate_submission(body: &RRsvpSubmit) -> Result<DBRsvpCreate, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = body.name.as_deref().unwrap_or("");
    if name.is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    } else if name.chars().count() > NAME_MAX {
        errors.push(FieldError {
            field: "name",
            message: "Name is too long",
        });
    }

    let email = body.email.as_deref().unwrap_or("");
    if email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if email.chars().count() > EMAIL_MAX {
        errors.push(FieldError {
            field: "email",
            message: "Email is too long",
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid email address",
        });
    }

    let attendance = body.attendance.as_deref().and_then(parse_attendance);
    if attendance.is_none() {
        errors.push(FieldError {
            field: "attendance",
            message: "Please select your attendance status",
        });
    }

    let guest_count = body.guest_count.unwrap_or(DEFAULT_GUEST_COUNT);
    if !(GUEST_MIN..=GUEST_MAX).contains(&guest_count) {
        errors.push(FieldError {
            field: "guestCount",
            message: "Guest count must be between 1 and 10",
        });
    }

    if let Some(dietary) = body.dietary_restrictions.as_deref() {
        if dietary.chars().count() > DIETARY_MAX {
            errors.push(FieldError {
                field: "dietaryRestrictions",
                message: "Dietary restrictions text is too long",
            });
        }
    }

    if let Some(message) = body.message.as_deref() {
        if message.chars().count() > MESSAGE_MAX {
            errors.push(FieldError {
                field: "message",
                message: "Message is too long",
            });
        }
    }

    match attendance {
        Some(attendance) if errors.is_empty() => Ok(DBRsvpCreate {
            name: name.to_owned(),
            email: email.to_owned(),
            attendance,
            guest_count,
            dietary_restrictions: normalize_optional(body.dietary_restrictions.as_deref()),
            message: normalize_optional(body.message.as_deref()),
        }),
        _ => Err(errors),
    }
}
