use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginData::Table)
                    .if_not_exists()
                    .col(string(LoginData::SessionId).primary_key())
                    .col(text(LoginData::OauthToken))
                    .col(timestamp_with_time_zone(LoginData::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_login_data_created_at")
                    .table(LoginData::Table)
                    .col(LoginData::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum LoginData {
    Table,
    SessionId,
    OauthToken,
    CreatedAt,
}
