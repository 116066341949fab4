//! Process configuration, read once at startup.
//!
//! Every setting has a command-line flag, an environment fallback and a
//! default, so the binary runs unconfigured against a local PostgreSQL.

use std::fmt;

use clap::{Args, Parser};
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "tododb";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Todo list REST API backed by PostgreSQL")]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "TODO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Keep todos in process memory instead of PostgreSQL.
    #[arg(long, env = "TODO_MEMORY_STORE")]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbConfig,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection parameters for the todos database.
#[derive(Args, Clone, PartialEq, Eq)]
pub struct DbConfig {
    #[arg(id = "db_host", long = "db-host", env = "POSTGRES_HOST", default_value = DEFAULT_DB_HOST)]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "POSTGRES_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub port: u16,

    #[arg(id = "db_name", long = "db-name", env = "POSTGRES_DB", default_value = DEFAULT_DB_NAME)]
    pub name: String,

    #[arg(id = "db_user", long = "db-user", env = "POSTGRES_USER", default_value = DEFAULT_DB_USER)]
    pub user: String,

    #[arg(id = "db_password", long = "db-password", env = "POSTGRES_PASSWORD", default_value = DEFAULT_DB_PASSWORD)]
    pub password: String,
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
