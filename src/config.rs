use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "venuebook", about = "Venue, artist and show booking directory")]
pub struct Config {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://venuebook.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// tracing filter directive, e.g. `info` or `venuebook=debug,tower_http=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,

    /// Sessions (and their pending flash messages) expire after this much inactivity
    #[arg(long, env = "SESSION_IDLE_MINUTES", default_value_t = 60)]
    pub session_idle_minutes: i64,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 16)]
    pub max_connections: u32,
}
