use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rsvp::Table)
                    .col(
                        ColumnDef::new(Rsvp::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Rsvp::Name)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Rsvp::Email)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Rsvp::Attendance)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Rsvp::GuestCount)
                            .integer()
                            .not_null()
                            .default(1)
                    )
                    .col(
                        ColumnDef::new(Rsvp::DietaryRestrictions)
                            .text()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Rsvp::Message)
                            .text()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Rsvp::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rsvp_created_at")
                    .table(Rsvp::Table)
                    .col(Rsvp::CreatedAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Rsvp::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rsvp {
    Table,
    Id,
    Name,
    Email,
    Attendance,
    GuestCount,
    DietaryRestrictions,
    Message,
    CreatedAt,
}
