//! Compiled-in table definitions.
//!
//! Every table is described by a [`TableSchema`]: the `CREATE TABLE` statement
//! plus the secondary indices that go with it. Address-like columns are
//! indexed but never declared as foreign keys; cross-table integrity belongs to
//! the ingestion side.

mod block;
mod log;
mod pair;
mod swap;
mod token;
mod transaction;

pub use {
    block::block, log::log, pair::pair, swap::swap, token::token, transaction::transaction,
};
use {
    crate::idens::Audit,
    sea_orm::DbBackend,
    sea_orm_migration::prelude::*,
};

/// Width of a `0x`-prefixed hex address.
pub const ADDRESS_LEN: u32 = 42;

/// Precision of USD-denominated swap values.
pub const USD_PRECISION: (u32, u32) = (84, 56);

/// Precision of gas price and gas limit.
pub const GAS_PRECISION: (u32, u32) = (24, 12);

// --------------------------------- TableSchema --------------------------------

#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub table: TableCreateStatement,
    pub indexes: Vec<(&'static str, IndexCreateStatement)>,
}

impl TableSchema {
    pub fn new(name: &'static str, table: TableCreateStatement) -> Self {
        Self {
            name,
            table,
            indexes: Vec::new(),
        }
    }

    /// Adds a non-unique index over `columns`, in order.
    pub fn index<I, C>(mut self, name: &'static str, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIden,
    {
        let mut index = Index::create();
        index.name(name).table(Alias::new(self.name));

        for column in columns {
            index.col(column);
        }

        self.indexes.push((name, index.to_owned()));
        self
    }

    pub fn column_names(&self) -> Vec<String> {
        self.table
            .get_columns()
            .iter()
            .map(|column| column.get_column_name())
            .collect()
    }

    pub fn index_names(&self) -> Vec<&'static str> {
        self.indexes.iter().map(|(name, _)| *name).collect()
    }
}

// ---------------------------------- columns -----------------------------------

pub(crate) fn address<T>(column: T) -> ColumnDef
where
    T: IntoIden,
{
    ColumnDef::new(column).string_len(ADDRESS_LEN).to_owned()
}

/// Exact decimal column with `precision` total and `scale` fractional digits.
///
/// sea-query renders SQLite decimals as `real` and refuses precisions above 16,
/// so on SQLite the type is spelled out as `numeric(p, s)` instead.
pub(crate) fn fixed_point<T>(
    backend: DbBackend,
    column: T,
    (precision, scale): (u32, u32),
) -> ColumnDef
where
    T: IntoIden,
{
    let mut def = ColumnDef::new(column);

    match backend {
        DbBackend::Sqlite => {
            def.custom(Alias::new(format!("numeric({precision}, {scale})")));
        },
        _ => {
            def.decimal_len(precision, scale);
        },
    }

    def.not_null().to_owned()
}

/// `createdAt` / `updatedAt`, both defaulting to the insertion time.
///
/// Zoned, so the stored instant does not depend on the session `TimeZone`.
pub(crate) fn audit_timestamps(table: &mut TableCreateStatement) {
    for column in [Audit::CreatedAt, Audit::UpdatedAt] {
        table.col(
            ColumnDef::new(column)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        );
    }
}
