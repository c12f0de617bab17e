use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Members::Id).integer().auto_increment().primary_key())
                    .col(ColumnDef::new(Members::Uid).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Members::Name).string().not_null())
                    .col(ColumnDef::new(Members::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Members::ActivationCode).string().not_null())
                    .col(ColumnDef::new(Members::IsAdmin).boolean().not_null().default(false))
                    .col(ColumnDef::new(Members::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Members::MembershipType).string().not_null().default("Standard"))
                    .col(ColumnDef::new(Members::PlanType).string().not_null().default("MEMBER"))
                    .col(
                        ColumnDef::new(Members::JoinDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Members::MembershipExpiresAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Members::LastLogin).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Members::PictureUrl).text().null())
                    .index(
                        Index::create()
                            .name("idx_members_email")
                            .table(Members::Table)
                            .col(Members::Email),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    Uid,
    Name,
    Email,
    ActivationCode,
    IsAdmin,
    IsActive,
    MembershipType,
    PlanType,
    JoinDate,
    MembershipExpiresAt,
    LastLogin,
    PictureUrl,
}
