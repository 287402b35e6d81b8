use {
    crate::{
        catalog::{DexTable, LogSchema},
        error::{BulkError, TableFailure},
        hooks::{ErrorSink, EventDispatcher, NullDispatcher, SchemaEvent, TracingSink},
        tables::{self, TableSchema},
    },
    sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait},
    sea_orm_migration::{SchemaManager as StatementRunner, prelude::*},
    std::{future::Future, sync::Arc},
    strum::IntoEnumIterator,
};

/// What a successful create hands back for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTable {
    pub name: &'static str,
    pub columns: Vec<String>,
    pub indexes: Vec<&'static str>,
}

impl From<&TableSchema> for CreatedTable {
    fn from(schema: &TableSchema) -> Self {
        Self {
            name: schema.name,
            columns: schema.column_names(),
            indexes: schema.index_names(),
        }
    }
}

// --------------------------- SchemaManagerBuilder ----------------------------

pub struct SchemaManagerBuilder {
    db: DatabaseConnection,
    sink: Arc<dyn ErrorSink + Send + Sync>,
    events: Arc<dyn EventDispatcher + Send + Sync>,
    log_schema: LogSchema,
}

impl SchemaManagerBuilder {
    pub fn with_error_sink<S>(self, sink: S) -> Self
    where
        S: ErrorSink + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
            ..self
        }
    }

    pub fn with_event_dispatcher<E>(self, events: E) -> Self
    where
        E: EventDispatcher + Send + Sync + 'static,
    {
        Self {
            events: Arc::new(events),
            ..self
        }
    }

    /// Picks the `Log` layout used by [`SchemaManager::create_table`] and the
    /// bulk operations.
    pub fn with_log_schema(self, log_schema: LogSchema) -> Self {
        Self { log_schema, ..self }
    }

    pub fn build(self) -> SchemaManager {
        SchemaManager {
            db: self.db,
            sink: self.sink,
            events: self.events,
            log_schema: self.log_schema,
        }
    }
}

// ------------------------------- SchemaManager --------------------------------

/// Creates and drops the indexer tables.
///
/// Holds nothing but the injected collaborators: a shared connection pool that
/// it never closes, an [`ErrorSink`] and an [`EventDispatcher`]. Operations are
/// independent of each other and may run concurrently; no ordering between
/// tables is required since none of them declare foreign keys.
///
/// Every failure is reported to the sink and then returned to the caller as
/// the original [`DbErr`].
#[derive(Clone)]
pub struct SchemaManager {
    db: DatabaseConnection,
    sink: Arc<dyn ErrorSink + Send + Sync>,
    events: Arc<dyn EventDispatcher + Send + Sync>,
    log_schema: LogSchema,
}

impl SchemaManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::builder(db).build()
    }

    pub fn builder(db: DatabaseConnection) -> SchemaManagerBuilder {
        SchemaManagerBuilder {
            db,
            sink: Arc::new(TracingSink),
            events: Arc::new(NullDispatcher),
            log_schema: LogSchema::default(),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn log_schema(&self) -> LogSchema {
        self.log_schema
    }

    /// Awaits `future`, reporting an error to the sink before returning it.
    pub async fn with_schema_logging<F, T>(&self, operation: &str, future: F) -> Result<T, DbErr>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        future
            .await
            .inspect_err(|error| self.sink.error(operation, error))
    }

    pub async fn create_token_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::token()).await
    }

    pub async fn create_pair_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::pair()).await
    }

    pub async fn create_swap_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::swap(self.db.get_database_backend())).await
    }

    /// `Log` with discrete `topic0` .. `topic3` columns.
    pub async fn create_log_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::log(LogSchema::TopicColumns)).await
    }

    /// `Log` with a single json `topics` column.
    pub async fn create_log_topics_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::log(LogSchema::TopicsDocument)).await
    }

    pub async fn create_block_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::block()).await
    }

    pub async fn create_transaction_table(&self) -> Result<CreatedTable, DbErr> {
        self.create(tables::transaction()).await
    }

    /// Creates one catalog table, using the configured `Log` layout.
    pub async fn create_table(&self, table: DexTable) -> Result<CreatedTable, DbErr> {
        self.create(table.schema(self.log_schema, self.db.get_database_backend()))
            .await
    }

    /// Drops `table_name` if it exists. The name is not checked against the
    /// catalog; a missing table is not an error.
    pub async fn drop_table(&self, table_name: &str) -> Result<(), DbErr> {
        let operation = format!("drop table {table_name}");

        self.with_schema_logging(&operation, async {
            StatementRunner::new(&self.db)
                .drop_table(
                    Table::drop()
                        .table(Alias::new(table_name))
                        .if_exists()
                        .to_owned(),
                )
                .await
        })
        .await?;

        tracing::info!(table = table_name, "Dropped table");

        self.events.dispatch(SchemaEvent::TableDropped {
            table: table_name.to_string(),
        });

        Ok(())
    }

    pub async fn drop_entity_table(&self, table: DexTable) -> Result<(), DbErr> {
        self.drop_table(table.name()).await
    }

    pub async fn has_table(&self, table_name: &str) -> Result<bool, DbErr> {
        let operation = format!("inspect table {table_name}");

        self.with_schema_logging(&operation, async {
            StatementRunner::new(&self.db).has_table(table_name).await
        })
        .await
    }

    /// Creates every catalog table in order. Failures are collected per table
    /// rather than stopping at the first one.
    pub async fn create_all_tables(&self) -> Result<Vec<CreatedTable>, BulkError> {
        let mut created = Vec::new();
        let mut failures = Vec::new();

        for table in DexTable::iter() {
            match self.create_table(table).await {
                Ok(descriptor) => created.push(descriptor),
                Err(error) => failures.push(TableFailure { table, error }),
            }
        }

        if failures.is_empty() {
            Ok(created)
        } else {
            Err(BulkError::Partial {
                attempted: DexTable::iter().len(),
                failures,
            })
        }
    }

    pub async fn drop_all_tables(&self) -> Result<(), BulkError> {
        let mut failures = Vec::new();

        for table in DexTable::iter() {
            if let Err(error) = self.drop_entity_table(table).await {
                failures.push(TableFailure { table, error });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(BulkError::Partial {
                attempted: DexTable::iter().len(),
                failures,
            })
        }
    }

    async fn create(&self, schema: TableSchema) -> Result<CreatedTable, DbErr> {
        let operation = format!("create table {}", schema.name);

        self.with_schema_logging(&operation, self.create_in_transaction(&schema))
            .await?;

        tracing::info!(
            table = schema.name,
            indexes = schema.indexes.len(),
            "Created table"
        );

        self.events.dispatch(SchemaEvent::TableCreated {
            table: schema.name.to_string(),
        });

        Ok(CreatedTable::from(&schema))
    }

    /// The table and its indices either all exist afterwards or, on backends
    /// with transactional DDL, none of them do.
    async fn create_in_transaction(&self, schema: &TableSchema) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        match Self::run_create_statements(&txn, schema).await {
            Ok(()) => txn.commit().await,
            Err(error) => {
                if let Err(rollback) = txn.rollback().await {
                    tracing::warn!(
                        table = schema.name,
                        %rollback,
                        "Failed to roll back table create"
                    );
                }

                Err(error)
            },
        }
    }

    async fn run_create_statements(
        txn: &DatabaseTransaction,
        schema: &TableSchema,
    ) -> Result<(), DbErr> {
        let runner = StatementRunner::new(txn);

        runner.create_table(schema.table.clone()).await?;

        for (_, index) in &schema.indexes {
            runner.create_index(index.clone()).await?;
        }

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
