//! Product Store Config

use clap::Args;

/// Product store connection settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// `PostgreSQL` connection string for the product store
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Upper bound on pooled store connections; every product request holds one
    /// for the length of its transaction
    #[arg(
        long,
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub database_max_connections: u32,
}
