pub use super::{
    block::Entity as Block, pair::Entity as Pair, swap::Entity as Swap, token::Entity as Token,
    transaction::Entity as Transaction,
};
