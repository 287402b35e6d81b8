use {
    super::TableSchema,
    crate::idens::Transaction,
    sea_orm_migration::prelude::*,
};

pub fn transaction() -> TableSchema {
    let table = Table::create()
        .table(Transaction::Table)
        .col(
            ColumnDef::new(Transaction::Hash)
                .string_len(42)
                .not_null()
                .primary_key()
                .unique_key(),
        )
        .col(ColumnDef::new(Transaction::BlockNumber).integer())
        .to_owned();

    TableSchema::new("Transaction", table).index("idx_blockNumber", [Transaction::BlockNumber])
}
