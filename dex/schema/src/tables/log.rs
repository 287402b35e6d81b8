use {
    super::{TableSchema, address},
    crate::{catalog::LogSchema, idens::Log},
    sea_orm_migration::prelude::*,
};

/// Both variants target the same `Log` table; only one may exist at a time.
pub fn log(variant: LogSchema) -> TableSchema {
    let mut table = Table::create();

    table
        .table(Log::Table)
        .col(ColumnDef::new(Log::BlockNumber).integer())
        .col(ColumnDef::new(Log::BlockHash).string_len(42))
        .col(ColumnDef::new(Log::TransactionIndex).small_integer())
        .col(ColumnDef::new(Log::Removed).boolean())
        .col(address(Log::Address))
        .col(ColumnDef::new(Log::Data).text());

    match variant {
        LogSchema::TopicColumns => {
            for topic in [Log::Topic0, Log::Topic1, Log::Topic2, Log::Topic3] {
                table.col(ColumnDef::new(topic).string_len(255));
            }
        },
        LogSchema::TopicsDocument => {
            table.col(ColumnDef::new(Log::Topics).json());
        },
    }

    table
        .col(ColumnDef::new(Log::TransactionHash).string_len(42))
        .col(ColumnDef::new(Log::LogIndex).small_integer());

    TableSchema::new("Log", table.to_owned())
        .index("log_blockNumber", [Log::BlockNumber])
        .index("log_blockNumber_logIndex", [Log::BlockNumber, Log::LogIndex])
}
