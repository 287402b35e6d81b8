use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Pair")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub addr: String,
    #[sea_orm(column_name = "tokenAddr")]
    pub token_addr: String,
    #[sea_orm(column_name = "lpAddr")]
    pub lp_addr: String,
    #[sea_orm(column_name = "factoryAddr")]
    pub factory_addr: Option<String>,
    #[sea_orm(column_name = "createDate")]
    pub create_date: Option<Date>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
