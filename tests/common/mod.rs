// Not every test binary uses every helper.
#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use toystore_api::db::{DbPool, establish_connection_pool};
use toystore_api::models::sale::NewSale;
use toystore_api::repository::DieselRepository;
use toystore_api::schema::sales;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Isolated SQLite database living in a temp directory; everything is
/// removed when the value drops.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 db path"))
            .expect("create connection pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

/// The API never writes sales, so fixtures insert them directly.
pub fn insert_sale(pool: &DbPool, client_id: i32, value: f64, sale_date: NaiveDate) {
    let mut conn = pool.get().expect("get connection");
    diesel::insert_into(sales::table)
        .values(&NewSale {
            client_id,
            value,
            sale_date,
        })
        .execute(&mut conn)
        .expect("insert sale");
}

pub fn count_sales(pool: &DbPool) -> i64 {
    let mut conn = pool.get().expect("get connection");
    sales::table
        .count()
        .get_result(&mut conn)
        .expect("count sales")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
