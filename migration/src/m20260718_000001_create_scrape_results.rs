use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScrapeResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrapeResults::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScrapeResults::Url).text().not_null())
                    .col(ColumnDef::new(ScrapeResults::Status).string().not_null())
                    .col(ColumnDef::new(ScrapeResults::Title).text().not_null())
                    .col(ColumnDef::new(ScrapeResults::Description).text().not_null())
                    .col(ColumnDef::new(ScrapeResults::Content).text().not_null())
                    .col(ColumnDef::new(ScrapeResults::ExtractedData).json_binary())
                    .col(ColumnDef::new(ScrapeResults::AiAnalysis).text())
                    .col(ColumnDef::new(ScrapeResults::ErrorMessage).text())
                    .col(
                        ColumnDef::new(ScrapeResults::WordCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::ImageCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::LinkCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::ParagraphCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::ScrapeDurationMs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::TimestampMs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapeResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scrape_results_timestamp_ms")
                    .table(ScrapeResults::Table)
                    .col(ScrapeResults::TimestampMs)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScrapeResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScrapeResults {
    Table,
    Id,
    Url,
    Status,
    Title,
    Description,
    Content,
    ExtractedData,
    AiAnalysis,
    ErrorMessage,
    WordCount,
    ImageCount,
    LinkCount,
    ParagraphCount,
    ScrapeDurationMs,
    TimestampMs,
    CreatedAt,
}
