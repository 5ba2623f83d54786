//! 为会议录像表补充 url 列
//!
//! 旧版实现是在请求路径里按需加列的，这里改为一次性迁移。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager
            .has_column("meeting_records", "url")
            .await?
        {
            return Ok(());
        }

        manager
            .alter_table(
                Table::alter()
                    .table(MeetingRecords::Table)
                    .add_column(ColumnDef::new(MeetingRecords::Url).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(MeetingRecords::Table)
                    .drop_column(MeetingRecords::Url)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MeetingRecords {
    #[sea_orm(iden = "meeting_records")]
    Table,
    Url,
}
