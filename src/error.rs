//! Unified error type.

use thiserror::Error;

/// The error type returned by shortly's fallible operations.
///
/// Route handlers surface failures through [`Outcome`](crate::Outcome); the
/// router renders the `Display` form into the 500 JSON error envelope and
/// nothing propagates past the dispatch boundary. The remaining cases reach
/// the binaries directly: socket binding, configuration loading, and the
/// database setup scripts. Each variant carries a distinct `Display` prefix
/// so script output tells the failure classes apart.
#[derive(Debug, Error)]
pub enum Error {
    /// Socket or file I/O failure.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or environment override could not be loaded.
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    /// Database connection or statement execution failure.
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure in the seed script.
    #[error("hash: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
