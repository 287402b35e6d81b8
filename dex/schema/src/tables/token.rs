use {
    super::{TableSchema, address, audit_timestamps},
    crate::idens::Token,
    sea_orm_migration::prelude::*,
};

pub fn token() -> TableSchema {
    let mut table = Table::create();

    table
        .table(Token::Table)
        .col(address(Token::Addr).not_null().primary_key().unique_key())
        .col(ColumnDef::new(Token::Decimals).small_unsigned())
        .col(ColumnDef::new(Token::Name).string_len(255))
        .col(ColumnDef::new(Token::Symbol).string_len(32))
        .col(ColumnDef::new(Token::CreateDate).timestamp_with_time_zone());

    audit_timestamps(&mut table);

    TableSchema::new("Token", table.to_owned())
        .index("idx_name", [Token::Name])
        .index("idx_symbol", [Token::Symbol])
}
