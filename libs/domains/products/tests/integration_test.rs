//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migration matches the entity
//! - Search conditions render to SQL that behaves like the in-memory filter
//! - The price check constraint is enforced
//!
//! They need a Docker daemon: `cargo test -p domain_products -- --ignored`.

use domain_products::*;
use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use test_utils::TestDatabase;

fn draft(name: &str, description: &str, price: Decimal) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        description: description.into(),
        price,
    }
}

fn shirt() -> ProductDraft {
    draft("Shirt", "Nice", Decimal::new(859678, 2))
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let created = repo.create(shirt()).await.unwrap();
    assert_eq!(created.name, "Shirt");
    assert_eq!(created.price, Decimal::new(859678, 2));

    let retrieved = repo.get_by_id(&created.id).await.unwrap();
    assert_eq!(retrieved, Some(created));

    assert_eq!(repo.get_by_id("A").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let created = repo.create(shirt()).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            draft("MacBook", "Notebook da hora!", Decimal::new(1895843, 2)),
        )
        .await
        .unwrap()
        .expect("product should exist");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, Decimal::new(1895843, 2));

    assert_eq!(repo.update("100", shirt()).await.unwrap(), None);

    assert!(repo.delete(&created.id).await.unwrap());
    assert!(!repo.delete(&created.id).await.unwrap());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_returns_creation_order() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let mut created = Vec::new();
    for price in [3, 1, 2] {
        created.push(repo.create(draft("Shirt", "Nice", Decimal::from(price))).await.unwrap());
    }

    assert_eq!(repo.list().await.unwrap(), created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_check_constraint() {
    let db = TestDatabase::new().await;

    let result = db
        .connection
        .execute_unprepared(
            "INSERT INTO products (id, name, description, price) VALUES ('x', 'a', 'b', 0)",
        )
        .await;

    assert!(result.is_err(), "non-positive price must be rejected");
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_matches_in_memory_filter() {
    let db = TestDatabase::new().await;
    let pg = PgProductRepository::new(db.connection());
    let memory = InMemoryProductRepository::new();

    let fixtures = [
        draft("Shirt", "Nice", Decimal::new(859678, 2)),
        draft("Shirt", "Nice", Decimal::new(956898, 2)),
        draft("Blue Shirt", "Very nice cotton", Decimal::TEN),
        draft("Pen", "Cheap", Decimal::new(152, 2)),
    ];
    for fixture in fixtures {
        pg.create(fixture.clone()).await.unwrap();
        memory.create(fixture).await.unwrap();
    }

    let filters = [
        ProductFilter::default(),
        ProductFilter::text("shirt"),
        ProductFilter::text("NICE"),
        ProductFilter::text("blue shirt"),
        ProductFilter::text("shirt cotton"),
        ProductFilter::text("   "),
        ProductFilter::price_range(Some(Decimal::new(859678, 2)), None),
        ProductFilter::price_range(None, Some(Decimal::new(352, 2))),
        ProductFilter::price_range(
            Some(Decimal::new(859678, 2)),
            Some(Decimal::new(1025036, 2)),
        ),
        ProductFilter::price_range(Some(Decimal::TEN), Some(Decimal::ONE)),
        ProductFilter {
            text: Some("shirt".into()),
            min_price: Some(Decimal::new(100, 0)),
            max_price: None,
        },
    ];

    for filter in filters {
        let from_pg: Vec<_> = pg
            .search(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.description, p.price))
            .collect();
        let from_memory: Vec<_> = memory
            .search(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.description, p.price))
            .collect();

        assert_eq!(from_pg, from_memory, "filter {filter:?}");
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_truncate_resets_between_scenarios() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    repo.create(shirt()).await.unwrap();
    db.truncate_products().await;

    assert!(repo.list().await.unwrap().is_empty());
}
