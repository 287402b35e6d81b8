use {
    super::{GAS_PRECISION, TableSchema, USD_PRECISION, address, audit_timestamps, fixed_point},
    crate::idens::Swap,
    sea_orm::DbBackend,
    sea_orm_migration::prelude::*,
};

/// Columns holding USD values, all `decimal(84, 56)`.
const USD_COLUMNS: [Swap; 7] = [
    Swap::LpReserveUsd,
    Swap::TokenInUsd,
    Swap::TokenOutUsd,
    Swap::LpInUsd,
    Swap::LpOutUsd,
    Swap::TokenPriceUsd,
    Swap::LpPriceUsd,
];

pub fn swap(backend: DbBackend) -> TableSchema {
    let mut table = Table::create();

    // A block emits many swap logs, so a swap is keyed by its position in the
    // block rather than by transaction.
    table
        .table(Swap::Table)
        .primary_key(Index::create().col(Swap::BlockNumber).col(Swap::LogIdx))
        .col(ColumnDef::new(Swap::BlockNumber).big_integer().not_null())
        .col(ColumnDef::new(Swap::TxHash).string_len(80).not_null())
        .col(ColumnDef::new(Swap::LogIdx).big_integer().not_null())
        .col(address(Swap::PairAddr).not_null())
        .col(address(Swap::TokenAddr).not_null())
        .col(address(Swap::LpAddr).not_null())
        .col(fixed_point(backend, Swap::GasPrice, GAS_PRECISION))
        .col(fixed_point(backend, Swap::GasLimit, GAS_PRECISION))
        .col(address(Swap::TxFrom))
        .col(address(Swap::TxTo))
        .col(address(Swap::SwapSender).not_null())
        .col(address(Swap::SwapTo).not_null())
        .col(ColumnDef::new(Swap::Side).string_len(4).not_null());

    for column in USD_COLUMNS {
        table.col(fixed_point(backend, column, USD_PRECISION));
    }

    table.col(ColumnDef::new(Swap::Timestamp).big_integer().not_null());

    audit_timestamps(&mut table);

    TableSchema::new("Swap", table.to_owned())
        .index("idx_swap_blockNumber", [Swap::BlockNumber])
        .index("idx_swap_txHash", [Swap::TxHash])
        .index("idx_swap_logIdx", [Swap::LogIdx])
        .index("idx_swap_pairAddr", [Swap::PairAddr])
        .index("idx_swap_tokenAddr", [Swap::TokenAddr])
        .index("idx_swap_lpAddr", [Swap::LpAddr])
        .index("idx_swap_txFrom", [Swap::TxFrom])
        .index("idx_swap_txTo", [Swap::TxTo])
        .index("idx_swap_swapSender", [Swap::SwapSender])
        .index("idx_swap_swapTo", [Swap::SwapTo])
        .index("idx_swap_side", [Swap::Side])
}
