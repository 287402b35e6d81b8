use {
    crate::tables::{self, TableSchema},
    sea_orm::DbBackend,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// The entities persisted by the indexer, one table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DexTable {
    Token,
    Pair,
    Swap,
    Log,
    Block,
    Transaction,
}

impl DexTable {
    /// Physical table name.
    pub fn name(self) -> &'static str {
        match self {
            DexTable::Token => "Token",
            DexTable::Pair => "Pair",
            DexTable::Swap => "Swap",
            DexTable::Log => "Log",
            DexTable::Block => "Block",
            DexTable::Transaction => "Transaction",
        }
    }

    pub fn schema(self, log: LogSchema, backend: DbBackend) -> TableSchema {
        match self {
            DexTable::Token => tables::token(),
            DexTable::Pair => tables::pair(),
            DexTable::Swap => tables::swap(backend),
            DexTable::Log => tables::log(log),
            DexTable::Block => tables::block(),
            DexTable::Transaction => tables::transaction(),
        }
    }
}

/// Which of the two `Log` layouts a deployment uses.
///
/// The variants share the `Log` table name and cannot coexist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogSchema {
    /// `topic0` .. `topic3` as separate columns.
    #[default]
    TopicColumns,
    /// A single json `topics` column.
    TopicsDocument,
}
