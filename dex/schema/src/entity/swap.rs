use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

/// One executed swap. Rows are append-only; `(block_number, log_idx)` is never
/// rewritten once inserted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Swap")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "blockNumber")]
    pub block_number: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "logIdx")]
    pub log_idx: i64,
    #[sea_orm(column_name = "txHash")]
    pub tx_hash: String,
    #[sea_orm(column_name = "pairAddr")]
    pub pair_addr: String,
    #[sea_orm(column_name = "tokenAddr")]
    pub token_addr: String,
    #[sea_orm(column_name = "lpAddr")]
    pub lp_addr: String,
    #[sea_orm(column_name = "gasPrice", column_type = "Decimal(Some((24, 12)))")]
    pub gas_price: BigDecimal,
    #[sea_orm(column_name = "gasLimit", column_type = "Decimal(Some((24, 12)))")]
    pub gas_limit: BigDecimal,
    #[sea_orm(column_name = "txFrom")]
    pub tx_from: Option<String>,
    #[sea_orm(column_name = "txTo")]
    pub tx_to: Option<String>,
    #[sea_orm(column_name = "swapSender")]
    pub swap_sender: String,
    #[sea_orm(column_name = "swapTo")]
    pub swap_to: String,
    /// `buy` or `sell`.
    pub side: String,
    #[sea_orm(column_name = "lpReserveUsd", column_type = "Decimal(Some((84, 56)))")]
    pub lp_reserve_usd: BigDecimal,
    #[sea_orm(column_name = "tokenInUsd", column_type = "Decimal(Some((84, 56)))")]
    pub token_in_usd: BigDecimal,
    #[sea_orm(column_name = "tokenOutUsd", column_type = "Decimal(Some((84, 56)))")]
    pub token_out_usd: BigDecimal,
    #[sea_orm(column_name = "lpInUsd", column_type = "Decimal(Some((84, 56)))")]
    pub lp_in_usd: BigDecimal,
    #[sea_orm(column_name = "lpOutUsd", column_type = "Decimal(Some((84, 56)))")]
    pub lp_out_usd: BigDecimal,
    #[sea_orm(column_name = "tokenPriceUsd", column_type = "Decimal(Some((84, 56)))")]
    pub token_price_usd: BigDecimal,
    #[sea_orm(column_name = "lpPriceUsd", column_type = "Decimal(Some((84, 56)))")]
    pub lp_price_usd: BigDecimal,
    pub timestamp: i64,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
