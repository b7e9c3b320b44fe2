// src/main.rs

use std::sync::Arc;

use blogstore::db::create_connection_pool;
use blogstore::repositories::{BlogRepository, SqliteBlogRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool()?);

    // 2. REPOSITORY
    // `Arc<dyn Trait>` so a test double can stand in for the real store.
    let repo: Arc<dyn BlogRepository> = Arc::new(SqliteBlogRepository::new(pool));

    // Initialize schema (idempotent). A failure here is fatal: never run
    // against an unmigrated schema.
    repo.migrate()?;

    log::info!("blogstore ready, {} posts", repo.list_all()?.len());

    Ok(())
}
