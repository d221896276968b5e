//! Schema setup and teardown from the SQL scripts shipped with the crate.
//!
//! `migrations/` holds the idempotent schema scripts (also applied by `sqlx::migrate!`),
//! `cleanup/` the scripts that drop it again, including sqlx's migration bookkeeping.

use sqlx::PgPool;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs every script of `migrations/` in file name order.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use crm_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    run_scripts(pool, &sql_files(&dir, true)?).await
}

/// Runs every script of `cleanup/` in reverse file name order.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    run_scripts(pool, &sql_files(&dir, false)?).await
}

/// `.sql` files of `dir`, sorted by file name
fn sql_files(dir: &Path, ascending: bool) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();
    files.sort();
    if !ascending {
        files.reverse();
    }
    Ok(files)
}

async fn run_scripts(pool: &PgPool, files: &[PathBuf]) -> Result<(), sqlx::Error> {
    for path in files {
        let sql = fs::read_to_string(path)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
        info!(script = %path.display(), "schema script applied");
    }
    Ok(())
}
