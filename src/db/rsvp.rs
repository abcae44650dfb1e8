use chrono::{DateTime, Utc};
use entity::rsvp::{
    ActiveModel as RsvpActive, Attendance, Column, Entity as Rsvp, Model as RsvpModel,
};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::rsvp::{DBRsvpCreate, RsvpStats};

#[derive(FromQueryResult)]
struct AttendanceAgg {
    attendance: Attendance,
    count: i64,
    // SUM(int4) comes back as int8, NULL over an empty group
    guests: Option<i64>,
}

impl PostgresService {
    /// Persists one validated submission. `id` and `created_at` are
    /// assigned here, exactly once, and never touched again.
    pub async fn create_rsvp(
        &self,
        payload: DBRsvpCreate,
    ) -> Result<(Uuid, DateTime<Utc>), DbErr> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        Rsvp::insert(RsvpActive {
            id: Set(id),
            name: Set(payload.name),
            email: Set(payload.email),
            attendance: Set(payload.attendance),
            guest_count: Set(payload.guest_count),
            dietary_restrictions: Set(payload.dietary_restrictions),
            message: Set(payload.message),
            created_at: Set(created_at),
        })
        .exec(&self.db)
        .await?;

        Ok((id, created_at))
    }

    /// Newest-first page of records plus the total count behind the filter.
    pub async fn list_rsvps(
        &self,
        filter: Option<Attendance>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<RsvpModel>, u64), DbErr> {
        let mut query = Rsvp::find();
        if let Some(attendance) = filter {
            query = query.filter(Column::Attendance.eq(attendance));
        }

        let total = query.clone().count(&self.db).await?;
        let rsvps = query
            .order_by_desc(Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok((rsvps, total))
    }

    /// Per-attendance record counts and the attending guest total,
    /// computed in a single group-by over the whole collection.
    pub async fn rsvp_stats(&self) -> Result<RsvpStats, DbErr> {
        let rows = Rsvp::find()
            .select_only()
            .column(Column::Attendance)
            .column_as(Column::Id.count(), "count")
            .column_as(Column::GuestCount.sum(), "guests")
            .group_by(Column::Attendance)
            .into_model::<AttendanceAgg>()
            .all(&self.db)
            .await?;

        let mut stats = RsvpStats::default();
        for row in rows {
            match row.attendance {
                Attendance::Attending => {
                    stats.attending = row.count;
                    stats.total_guests = row.guests.unwrap_or(0);
                }
                Attendance::Declining => stats.declining = row.count,
            }
        }
        Ok(stats)
    }
}
