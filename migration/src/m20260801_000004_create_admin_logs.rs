use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AdminLogs::Id).big_integer().auto_increment().primary_key())
                    .col(ColumnDef::new(AdminLogs::Action).string().not_null())
                    .col(ColumnDef::new(AdminLogs::TargetEmail).string().null())
                    .col(ColumnDef::new(AdminLogs::PerformedBy).string().not_null())
                    .col(
                        ColumnDef::new(AdminLogs::PerformedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(AdminLogs::Details).json_binary().null())
                    .index(
                        Index::create()
                            .name("idx_admin_logs_performed_at")
                            .table(AdminLogs::Table)
                            .col(AdminLogs::PerformedAt),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminLogs {
    Table,
    Id,
    Action,
    TargetEmail,
    PerformedBy,
    PerformedAt,
    Details,
}
