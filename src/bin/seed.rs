//! Inserts sample data into the configured database.
//!
//! ```text
//! cargo run --bin seed
//! ```
//!
//! Creates one user account with a bcrypt-hashed password, then executes
//! `database/seed.sql` as a single batch. Like `migrate`, there is no
//! rollback: a failure partway through leaves the earlier inserts in place.

use std::process::ExitCode;

use shortly::{db, Config, Error};

const SEED_FILE: &str = "database/seed.sql";

const SEED_USER_NAME: &str = "Luis";
const SEED_USER_EMAIL: &str = "luis@gmail.com";
const SEED_USER_PASSWORD: &str = "1234567890";

async fn run() -> Result<(), Error> {
    let config = Config::load()?;
    let sql = std::fs::read_to_string(SEED_FILE)?;
    let pool = db::connect(&config.database).await?;

    // bcrypt at DEFAULT_COST takes a noticeable fraction of a second.
    let password = bcrypt::hash(SEED_USER_PASSWORD, bcrypt::DEFAULT_COST)?;
    sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
        .bind(SEED_USER_NAME)
        .bind(SEED_USER_EMAIL)
        .bind(password)
        .execute(&pool)
        .await?;

    db::exec_batch(&pool, &sql).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => {
            println!("seed data inserted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
