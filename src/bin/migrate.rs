//! Applies `database/schema.sql` to the configured database.
//!
//! ```text
//! cargo run --bin migrate
//! ```
//!
//! The schema file is executed as a single batch. There is no migration
//! history table and no rollback; re-running against an already-migrated
//! database fails on the first `CREATE TABLE`.

use std::process::ExitCode;

use shortly::{db, Config, Error};

const SCHEMA_FILE: &str = "database/schema.sql";

async fn run() -> Result<(), Error> {
    let config = Config::load()?;
    let sql = std::fs::read_to_string(SCHEMA_FILE)?;
    let pool = db::connect(&config.database).await?;
    db::exec_batch(&pool, &sql).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => {
            println!("migration applied");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
