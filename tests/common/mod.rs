#![allow(dead_code)]

use catalog::db::{DbPool, establish_connection_pool, run_migrations};
use catalog::repository::DieselRepository;
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory for the duration
/// of one test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path");

        let pool = establish_connection_pool(url).expect("create pool");
        run_migrations(&pool).expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}
