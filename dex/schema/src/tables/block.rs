use {
    super::{TableSchema, address},
    crate::idens::Block,
    sea_orm_migration::prelude::*,
};

pub fn block() -> TableSchema {
    // `gasLimit`, `gasUsed` and `_difficulty` are kept as strings; they overflow
    // the integer types a JSON-RPC client hands back.
    let table = Table::create()
        .table(Block::Table)
        .col(ColumnDef::new(Block::Hash).string_len(42))
        .col(ColumnDef::new(Block::ParentHash).string_len(42))
        .col(
            ColumnDef::new(Block::Number)
                .integer()
                .not_null()
                .primary_key()
                .unique_key(),
        )
        .col(ColumnDef::new(Block::Timestamp).integer())
        .col(ColumnDef::new(Block::Nonce).string_len(42))
        .col(ColumnDef::new(Block::Difficulty).small_integer())
        .col(ColumnDef::new(Block::GasLimit).string_len(18))
        .col(ColumnDef::new(Block::GasUsed).string_len(18))
        .col(address(Block::Miner))
        .col(ColumnDef::new(Block::ExtraData).text())
        .col(ColumnDef::new(Block::TotalDifficulty).string_len(42))
        .to_owned();

    TableSchema::new("Block", table)
}
