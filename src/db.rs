use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::cli::Cli;
use crate::error::{AnalyzerError, Result};

/// One MySQL session per analysis run.
///
/// The pool is capped at a single connection so the timed query and its
/// EXPLAIN variant run sequentially over the same session. The caller is
/// responsible for invoking [`Session::close`] on every exit path.
pub struct Session {
    pool: MySqlPool,
}

impl Session {
    /// Establish the session eagerly; a failure here means analysis never starts.
    pub async fn connect(cli: &Cli) -> Result<Self> {
        let opts = MySqlConnectOptions::new()
            .host(&cli.host)
            .port(cli.port)
            .username(&cli.user)
            .password(&cli.password)
            .database(&cli.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(opts)
            .await
            .map_err(AnalyzerError::Connection)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Release the session. Waits for the underlying connection to close.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
