use sea_orm::DbErr;

// --------------------------------- ErrorSink ----------------------------------

/// Receives every failure before it is handed back to the caller.
///
/// Implementations must not panic or block.
pub trait ErrorSink {
    fn error(&self, operation: &str, error: &DbErr);
}

/// Emits failures as `ERROR` level tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn error(&self, operation: &str, error: &DbErr) {
        tracing::error!(operation, %error, "Schema operation failed");
    }
}

// ------------------------------ EventDispatcher -------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEvent {
    TableCreated { table: String },
    TableDropped { table: String },
}

/// Lifecycle notifications, sent only after an operation has succeeded.
pub trait EventDispatcher {
    fn dispatch(&self, event: SchemaEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatcher;

impl EventDispatcher for NullDispatcher {
    fn dispatch(&self, _event: SchemaEvent) {}
}
