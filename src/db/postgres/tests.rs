//! PostgreSQL repository tests. Each test gets a fresh, migrated database.

use super::*;
use sqlx::PgPool;

const FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/stocker-tests/fixtures/candlesticks.sql"
));

fn repository(pool: PgPool) -> PgCandlestickRepository {
    PgCandlestickRepository::new(DatabasePool::from_pool(pool))
}

async fn seeded(pool: PgPool) -> PgCandlestickRepository {
    let repository = repository(pool);
    for candle in [
        NewCandlestick::new(100.0, 102.0, 113.0, 97.0, 5000, 1753038000, "BOL.ST"),
        NewCandlestick::new(102.0, 104.0, 115.0, 99.0, 6000, 1753124400, "BOL.ST"),
        NewCandlestick::new(250.0, 248.0, 255.0, 245.0, 1200, 1753038000, "VOLV-B.ST"),
    ] {
        repository.insert(candle).await.unwrap();
    }
    repository
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_returns_generated_id(pool: PgPool) {
    let repository = repository(pool);

    let first = repository
        .insert(NewCandlestick::new(1.0, 2.0, 3.0, 0.5, 10, 1, "ABC.ST"))
        .await
        .unwrap();
    let second = repository
        .insert(NewCandlestick::new(2.0, 3.0, 4.0, 1.5, 20, 2, "ABC.ST"))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.symbol, "ABC.ST");
    assert_eq!(second.volume, 20);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_in_insertion_order(pool: PgPool) {
    let repository = seeded(pool).await;

    let page = repository.list(PageRequest::default()).await.unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].open, 100.0);
    assert_eq!(page.items[1].close, 104.0);
    assert_eq!(page.items[2].symbol, "VOLV-B.ST");
    assert!(page.items.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_paging(pool: PgPool) {
    let repository = seeded(pool).await;

    let page = repository
        .list(PageRequest { number: 1, size: 2 })
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].symbol, "VOLV-B.ST");

    let past_end = repository
        .list(PageRequest { number: 5, size: 2 })
        .await
        .unwrap();
    assert_eq!(past_end.total, 3);
    assert!(past_end.items.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id(pool: PgPool) {
    let repository = seeded(pool).await;
    let first = repository.list(PageRequest::default()).await.unwrap().items[0].clone();

    let found = repository.find_by_id(first.id).await.unwrap();
    assert_eq!(found, Some(first));
    assert!(repository.find_by_id(i32::MAX).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_symbol_exact_match(pool: PgPool) {
    let repository = seeded(pool).await;

    let matches = repository.find_by_symbol("BOL.ST").await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|c| c.symbol == "BOL.ST"));
    assert!(matches[0].id < matches[1].id);

    assert!(repository.find_by_symbol("bol.st").await.unwrap().is_empty());
    assert!(repository.find_by_symbol("BOL").await.unwrap().is_empty());
    assert!(repository.find_by_symbol("XXX.ST").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_live_fixture_loads(pool: PgPool) {
    sqlx::raw_sql(FIXTURE).execute(&pool).await.unwrap();
    let repository = repository(pool);

    let page = repository.list(PageRequest::default()).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].open, 100.0);
    assert_eq!(page.items[0].timestamp, 1753038000);
    assert_eq!(page.items[1].close, 104.0);
    assert_eq!(page.items[1].volume, 6000);
    assert_eq!(repository.find_by_symbol("BOL.ST").await.unwrap().len(), 2);
}
