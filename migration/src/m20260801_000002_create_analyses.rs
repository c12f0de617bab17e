use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Analyses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Analyses::Id).uuid().primary_key())
                    .col(ColumnDef::new(Analyses::UserUid).uuid().not_null())
                    .col(ColumnDef::new(Analyses::Pair).string().not_null())
                    .col(ColumnDef::new(Analyses::Timeframe).string().not_null())
                    .col(ColumnDef::new(Analyses::Risk).string().not_null())
                    .col(ColumnDef::new(Analyses::AiText).text().not_null())
                    .col(ColumnDef::new(Analyses::ParsedJson).json_binary().not_null())
                    .col(
                        ColumnDef::new(Analyses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .index(
                        Index::create()
                            .name("idx_analyses_user_created")
                            .table(Analyses::Table)
                            .col(Analyses::UserUid)
                            .col(Analyses::CreatedAt),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analyses_member")
                            .from(Analyses::Table, Analyses::UserUid)
                            .to(Members::Table, Members::Uid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Analyses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Analyses {
    Table,
    Id,
    UserUid,
    Pair,
    Timeframe,
    Risk,
    AiText,
    ParsedJson,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Uid,
}
