//! Needs a disposable Postgres database:
//!
//! ```sh
//! DEX_SCHEMA_TEST_DATABASE_URL=postgres://postgres@localhost:5432/dex_schema_test \
//!     cargo test -p dex-schema --test postgres -- --ignored --test-threads 1
//! ```

use {
    assertor::*,
    dex_schema::{DexTable, ErrorSink, SchemaErrorKind, SchemaManager, connect_db_with_url},
    sea_orm::{ConnectionTrait, DbErr},
    std::sync::{Arc, Mutex},
};

const DEFAULT_URL: &str = "postgres://postgres@localhost:5432/dex_schema_test";

#[derive(Clone, Default)]
struct RecordingSink {
    errors: Arc<Mutex<Vec<String>>>,
}

impl ErrorSink for RecordingSink {
    fn error(&self, operation: &str, _error: &DbErr) {
        self.errors.lock().unwrap().push(operation.to_string());
    }
}

async fn manager() -> (SchemaManager, RecordingSink) {
    let url = std::env::var("DEX_SCHEMA_TEST_DATABASE_URL").unwrap_or(DEFAULT_URL.to_string());
    let db = connect_db_with_url(&url, 2).await.unwrap();
    let sink = RecordingSink::default();

    let manager = SchemaManager::builder(db)
        .with_error_sink(sink.clone())
        .build();

    manager.drop_all_tables().await.unwrap();

    (manager, sink)
}

fn swap_row(log_idx: i64, usd: &str) -> String {
    let addr = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    format!(
        r#"INSERT INTO "Swap" (
            "blockNumber", "txHash", "logIdx", "pairAddr", "tokenAddr", "lpAddr",
            "gasPrice", "gasLimit", "swapSender", "swapTo", "side",
            "lpReserveUsd", "tokenInUsd", "tokenOutUsd", "lpInUsd", "lpOutUsd",
            "tokenPriceUsd", "lpPriceUsd", "timestamp"
        ) VALUES (
            1, '0x01', {log_idx}, '{addr}', '{addr}', '{addr}',
            0.000000001, 21000, '{addr}', '{addr}', 'sell',
            {usd}, {usd}, {usd}, {usd}, {usd},
            {usd}, {usd}, 1700000000
        )"#
    )
}

#[ignore = "requires a postgres database"]
#[tokio::test]
async fn usd_values_keep_56_fractional_digits() {
    let (manager, _) = manager().await;
    manager.create_swap_table().await.unwrap();

    let usd = format!("0.{}1", "0".repeat(55));
    manager.db().execute_unprepared(&swap_row(0, &usd)).await.unwrap();

    let stored: String = manager
        .db()
        .query_one(sea_orm::Statement::from_string(
            manager.db().get_database_backend(),
            r#"SELECT "tokenPriceUsd"::text FROM "Swap""#,
        ))
        .await
        .unwrap()
        .unwrap()
        .try_get_by_index(0)
        .unwrap();

    assert_that!(stored).is_equal_to(usd);
}

#[ignore = "requires a postgres database"]
#[tokio::test]
async fn usd_overflow_is_rejected_and_logged() {
    let (manager, sink) = manager().await;
    manager.create_swap_table().await.unwrap();

    // 29 integral digits, one more than `numeric(84, 56)` allows.
    let usd = format!("1{}", "0".repeat(28));
    let err = manager
        .with_schema_logging("insert swap", manager.db().execute_unprepared(&swap_row(0, &usd)))
        .await
        .unwrap_err();

    assert_that!(SchemaErrorKind::of(&err)).is_equal_to(SchemaErrorKind::ConstraintRejection);
    assert_that!(*sink.errors.lock().unwrap()).is_equal_to(vec!["insert swap".to_string()]);
}

#[ignore = "requires a postgres database"]
#[tokio::test]
async fn duplicate_create_is_a_schema_conflict() {
    let (manager, sink) = manager().await;

    manager.create_table(DexTable::Pair).await.unwrap();
    let err = manager.create_table(DexTable::Pair).await.unwrap_err();

    assert_that!(SchemaErrorKind::of(&err)).is_equal_to(SchemaErrorKind::SchemaConflict);
    assert_that!(*sink.errors.lock().unwrap()).is_equal_to(vec!["create table Pair".to_string()]);
}

#[ignore = "requires a postgres database"]
#[tokio::test]
async fn create_all_then_drop_all() {
    let (manager, _) = manager().await;

    let created = manager.create_all_tables().await.unwrap();
    assert_that!(created.len()).is_equal_to(6);

    manager.drop_all_tables().await.unwrap();

    for table in ["Token", "Pair", "Swap", "Log", "Block", "Transaction"] {
        assert_that!(manager.has_table(table).await.unwrap()).is_false();
    }
}
