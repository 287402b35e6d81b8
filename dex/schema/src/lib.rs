mod catalog;
mod context;
pub mod entity;
mod error;
mod hooks;
pub mod idens;
mod manager;
pub mod tables;

pub use {
    catalog::{DexTable, LogSchema},
    context::{connect_db_with_url, connect_memory_db},
    error::{BulkError, SchemaErrorKind, TableFailure},
    hooks::{ErrorSink, EventDispatcher, NullDispatcher, SchemaEvent, TracingSink},
    manager::{CreatedTable, SchemaManager, SchemaManagerBuilder},
};
