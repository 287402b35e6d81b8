use {
    super::{TableSchema, address, audit_timestamps},
    crate::idens::Pair,
    sea_orm_migration::prelude::*,
};

pub fn pair() -> TableSchema {
    let mut table = Table::create();

    table
        .table(Pair::Table)
        .col(address(Pair::Addr).not_null().primary_key().unique_key())
        .col(address(Pair::TokenAddr).not_null())
        .col(address(Pair::LpAddr).not_null())
        .col(address(Pair::FactoryAddr))
        .col(ColumnDef::new(Pair::CreateDate).date());

    audit_timestamps(&mut table);

    TableSchema::new("Pair", table.to_owned())
        .index("idx_tokenAddr", [Pair::TokenAddr])
        .index("idx_lpAddr", [Pair::LpAddr])
        .index("idx_factoryAddr", [Pair::FactoryAddr])
}
