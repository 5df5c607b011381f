//! Shared test infrastructure for the products workspace.
//!
//! `TestDatabase` starts a throwaway PostgreSQL container and applies the
//! workspace migrations, so repository tests run against the real schema.
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let conn = db.connection();
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;
