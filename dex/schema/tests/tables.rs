use {
    assertor::*,
    dex_schema::{DexTable, LogSchema, SchemaManager, connect_memory_db},
    sea_orm::{ConnectionTrait, DbBackend, Statement},
    std::collections::BTreeSet,
    test_case::test_case,
};

#[derive(Debug)]
struct Column {
    name: String,
    column_type: String,
    not_null: bool,
    /// 1-based position in the primary key, 0 if not part of it.
    pk: i32,
}

async fn manager() -> SchemaManager {
    SchemaManager::new(connect_memory_db().await.unwrap())
}

async fn pragma(manager: &SchemaManager, pragma: &str, target: &str) -> Vec<sea_orm::QueryResult> {
    manager
        .db()
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            format!(r#"PRAGMA {pragma}("{target}")"#),
        ))
        .await
        .unwrap()
}

async fn columns(manager: &SchemaManager, table: &str) -> Vec<Column> {
    pragma(manager, "table_info", table)
        .await
        .into_iter()
        .map(|row| Column {
            name: row.try_get("", "name").unwrap(),
            column_type: row.try_get("", "type").unwrap(),
            not_null: row.try_get::<i32>("", "notnull").unwrap() == 1,
            pk: row.try_get("", "pk").unwrap(),
        })
        .collect()
}

/// Indices created with `CREATE INDEX`, leaving out the ones SQLite derives
/// from `PRIMARY KEY` and `UNIQUE`.
async fn indexes(manager: &SchemaManager, table: &str) -> BTreeSet<String> {
    pragma(manager, "index_list", table)
        .await
        .into_iter()
        .filter(|row| row.try_get::<String>("", "origin").unwrap() == "c")
        .map(|row| row.try_get("", "name").unwrap())
        .collect()
}

async fn index_columns(manager: &SchemaManager, index: &str) -> Vec<String> {
    pragma(manager, "index_info", index)
        .await
        .into_iter()
        .map(|row| row.try_get("", "name").unwrap())
        .collect()
}

fn column<'a>(columns: &'a [Column], name: &str) -> &'a Column {
    columns
        .iter()
        .find(|column| column.name == name)
        .unwrap_or_else(|| panic!("missing column {name}"))
}

fn primary_key(columns: &[Column]) -> Vec<&str> {
    let mut pk = columns
        .iter()
        .filter(|column| column.pk > 0)
        .collect::<Vec<_>>();
    pk.sort_by_key(|column| column.pk);
    pk.into_iter().map(|column| column.name.as_str()).collect()
}

#[test_case(DexTable::Token ; "token")]
#[test_case(DexTable::Pair ; "pair")]
#[test_case(DexTable::Swap ; "swap")]
#[test_case(DexTable::Log ; "log")]
#[test_case(DexTable::Block ; "block")]
#[test_case(DexTable::Transaction ; "transaction")]
#[tokio::test]
async fn created_table_matches_descriptor(table: DexTable) {
    let manager = manager().await;

    let created = manager.create_table(table).await.unwrap();
    let columns = columns(&manager, table.name()).await;

    let names = columns.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
    assert_that!(names).is_equal_to(created.columns);

    let expected = created
        .indexes
        .iter()
        .map(|name| name.to_string())
        .collect::<BTreeSet<_>>();
    assert_that!(indexes(&manager, table.name()).await).is_equal_to(expected);
}

#[tokio::test]
async fn token_table() {
    let manager = manager().await;
    manager.create_token_table().await.unwrap();

    let columns = columns(&manager, "Token").await;

    assert_that!(primary_key(&columns)).is_equal_to(vec!["addr"]);
    assert_that!(column(&columns, "addr").column_type.as_str()).is_equal_to("varchar(42)");
    assert_that!(column(&columns, "symbol").column_type.as_str()).is_equal_to("varchar(32)");
    assert_that!(column(&columns, "decimals").not_null).is_false();
    assert_that!(column(&columns, "createdAt").not_null).is_true();
    assert_that!(column(&columns, "updatedAt").not_null).is_true();
    assert_that!(index_columns(&manager, "idx_symbol").await)
        .is_equal_to(vec!["symbol".to_string()]);
}

#[tokio::test]
async fn pair_table() {
    let manager = manager().await;
    manager.create_pair_table().await.unwrap();

    let columns = columns(&manager, "Pair").await;

    assert_that!(primary_key(&columns)).is_equal_to(vec!["addr"]);
    assert_that!(column(&columns, "addr").not_null).is_true();
    assert_that!(column(&columns, "tokenAddr").not_null).is_true();
    assert_that!(column(&columns, "lpAddr").not_null).is_true();
    assert_that!(column(&columns, "factoryAddr").not_null).is_false();
    assert_that!(column(&columns, "createDate").not_null).is_false();
}

#[tokio::test]
async fn swap_table() {
    let manager = manager().await;
    manager.create_swap_table().await.unwrap();

    let columns = columns(&manager, "Swap").await;

    assert_that!(primary_key(&columns)).is_equal_to(vec!["blockNumber", "logIdx"]);

    for usd in [
        "lpReserveUsd",
        "tokenInUsd",
        "tokenOutUsd",
        "lpInUsd",
        "lpOutUsd",
        "tokenPriceUsd",
        "lpPriceUsd",
    ] {
        let column = column(&columns, usd);
        assert_that!(column.column_type.as_str()).is_equal_to("numeric(84, 56)");
        assert_that!(column.not_null).is_true();
    }

    for gas in ["gasPrice", "gasLimit"] {
        assert_that!(column(&columns, gas).column_type.as_str()).is_equal_to("numeric(24, 12)");
    }

    assert_that!(column(&columns, "side").column_type.as_str()).is_equal_to("varchar(4)");
    assert_that!(column(&columns, "txHash").column_type.as_str()).is_equal_to("varchar(80)");
    assert_that!(column(&columns, "swapSender").not_null).is_true();
    assert_that!(column(&columns, "txFrom").not_null).is_false();
    assert_that!(column(&columns, "txTo").not_null).is_false();

    assert_that!(indexes(&manager, "Swap").await.len()).is_equal_to(11);
}

#[tokio::test]
async fn log_table_has_no_primary_key() {
    let manager = manager().await;
    manager.create_log_table().await.unwrap();

    let columns = columns(&manager, "Log").await;

    assert_that!(primary_key(&columns)).is_empty();
    assert!(columns.iter().all(|column| !column.not_null));
    assert_that!(index_columns(&manager, "log_blockNumber_logIndex").await)
        .is_equal_to(vec!["blockNumber".to_string(), "logIndex".to_string()]);
}

#[test_case(
    LogSchema::TopicColumns, &["topic0", "topic1", "topic2", "topic3"], "topics" ; "topic columns"
)]
#[test_case(LogSchema::TopicsDocument, &["topics"], "topic0" ; "topics document")]
#[tokio::test]
async fn log_variants(variant: LogSchema, present: &[&str], absent: &str) {
    let manager = SchemaManager::builder(connect_memory_db().await.unwrap())
        .with_log_schema(variant)
        .build();
    manager.create_table(DexTable::Log).await.unwrap();

    let names = columns(&manager, "Log")
        .await
        .into_iter()
        .map(|column| column.name)
        .collect::<Vec<_>>();

    for name in present {
        assert_that!(names).contains(name.to_string());
    }
    assert_that!(names).does_not_contain(absent.to_string());
}

#[tokio::test]
async fn block_and_transaction_tables() {
    let manager = manager().await;
    manager.create_block_table().await.unwrap();
    manager.create_transaction_table().await.unwrap();

    let block = columns(&manager, "Block").await;
    assert_that!(primary_key(&block)).is_equal_to(vec!["number"]);
    assert_that!(column(&block, "gasLimit").column_type.as_str()).is_equal_to("varchar(18)");
    assert_that!(column(&block, "_difficulty").column_type.as_str()).is_equal_to("varchar(42)");
    assert_that!(column(&block, "parentHash").not_null).is_false();

    let transaction = columns(&manager, "Transaction").await;
    assert_that!(primary_key(&transaction)).is_equal_to(vec!["hash"]);
    assert_that!(indexes(&manager, "Transaction").await)
        .is_equal_to(BTreeSet::from(["idx_blockNumber".to_string()]));
}
