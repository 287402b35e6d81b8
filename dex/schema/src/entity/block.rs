use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "Block")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub number: i32,
    pub hash: Option<String>,
    #[sea_orm(column_name = "parentHash")]
    pub parent_hash: Option<String>,
    pub timestamp: Option<i32>,
    pub nonce: Option<String>,
    pub difficulty: Option<i16>,
    #[sea_orm(column_name = "gasLimit")]
    pub gas_limit: Option<String>,
    #[sea_orm(column_name = "gasUsed")]
    pub gas_used: Option<String>,
    pub miner: Option<String>,
    #[sea_orm(column_name = "extraData", column_type = "Text", nullable)]
    pub extra_data: Option<String>,
    /// Full difficulty, string encoded.
    #[sea_orm(column_name = "_difficulty")]
    pub total_difficulty: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
