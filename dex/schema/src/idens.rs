use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Clone, Copy)]
pub enum Token {
    #[sea_orm(iden = "Token")]
    Table,
    #[sea_orm(iden = "addr")]
    Addr,
    #[sea_orm(iden = "decimals")]
    Decimals,
    #[sea_orm(iden = "name")]
    Name,
    #[sea_orm(iden = "symbol")]
    Symbol,
    #[sea_orm(iden = "createDate")]
    CreateDate,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Pair {
    #[sea_orm(iden = "Pair")]
    Table,
    #[sea_orm(iden = "addr")]
    Addr,
    #[sea_orm(iden = "tokenAddr")]
    TokenAddr,
    #[sea_orm(iden = "lpAddr")]
    LpAddr,
    #[sea_orm(iden = "factoryAddr")]
    FactoryAddr,
    #[sea_orm(iden = "createDate")]
    CreateDate,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Swap {
    #[sea_orm(iden = "Swap")]
    Table,
    #[sea_orm(iden = "blockNumber")]
    BlockNumber,
    #[sea_orm(iden = "txHash")]
    TxHash,
    #[sea_orm(iden = "logIdx")]
    LogIdx,
    #[sea_orm(iden = "pairAddr")]
    PairAddr,
    #[sea_orm(iden = "tokenAddr")]
    TokenAddr,
    #[sea_orm(iden = "lpAddr")]
    LpAddr,
    #[sea_orm(iden = "gasPrice")]
    GasPrice,
    #[sea_orm(iden = "gasLimit")]
    GasLimit,
    #[sea_orm(iden = "txFrom")]
    TxFrom,
    #[sea_orm(iden = "txTo")]
    TxTo,
    #[sea_orm(iden = "swapSender")]
    SwapSender,
    #[sea_orm(iden = "swapTo")]
    SwapTo,
    #[sea_orm(iden = "side")]
    Side,
    #[sea_orm(iden = "lpReserveUsd")]
    LpReserveUsd,
    #[sea_orm(iden = "tokenInUsd")]
    TokenInUsd,
    #[sea_orm(iden = "tokenOutUsd")]
    TokenOutUsd,
    #[sea_orm(iden = "lpInUsd")]
    LpInUsd,
    #[sea_orm(iden = "lpOutUsd")]
    LpOutUsd,
    #[sea_orm(iden = "tokenPriceUsd")]
    TokenPriceUsd,
    #[sea_orm(iden = "lpPriceUsd")]
    LpPriceUsd,
    #[sea_orm(iden = "timestamp")]
    Timestamp,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Log {
    #[sea_orm(iden = "Log")]
    Table,
    #[sea_orm(iden = "blockNumber")]
    BlockNumber,
    #[sea_orm(iden = "blockHash")]
    BlockHash,
    #[sea_orm(iden = "transactionIndex")]
    TransactionIndex,
    #[sea_orm(iden = "removed")]
    Removed,
    #[sea_orm(iden = "address")]
    Address,
    #[sea_orm(iden = "data")]
    Data,
    #[sea_orm(iden = "topic0")]
    Topic0,
    #[sea_orm(iden = "topic1")]
    Topic1,
    #[sea_orm(iden = "topic2")]
    Topic2,
    #[sea_orm(iden = "topic3")]
    Topic3,
    #[sea_orm(iden = "topics")]
    Topics,
    #[sea_orm(iden = "transactionHash")]
    TransactionHash,
    #[sea_orm(iden = "logIndex")]
    LogIndex,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Block {
    #[sea_orm(iden = "Block")]
    Table,
    #[sea_orm(iden = "hash")]
    Hash,
    #[sea_orm(iden = "parentHash")]
    ParentHash,
    #[sea_orm(iden = "number")]
    Number,
    #[sea_orm(iden = "timestamp")]
    Timestamp,
    #[sea_orm(iden = "nonce")]
    Nonce,
    #[sea_orm(iden = "difficulty")]
    Difficulty,
    #[sea_orm(iden = "gasLimit")]
    GasLimit,
    #[sea_orm(iden = "gasUsed")]
    GasUsed,
    #[sea_orm(iden = "miner")]
    Miner,
    #[sea_orm(iden = "extraData")]
    ExtraData,
    #[sea_orm(iden = "_difficulty")]
    TotalDifficulty,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Transaction {
    #[sea_orm(iden = "Transaction")]
    Table,
    #[sea_orm(iden = "hash")]
    Hash,
    #[sea_orm(iden = "blockNumber")]
    BlockNumber,
}

/// Row audit columns shared by `Token`, `Pair` and `Swap`.
#[derive(DeriveIden, Clone, Copy)]
pub enum Audit {
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
}
