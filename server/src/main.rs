use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{Config, MemoryStore, PgStore, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    todo_server::logging::init_tracing();
    let config = Config::parse();
    let listener = TcpListener::bind(config.socket_addr()).await?;

    if config.memory {
        info!("using in-memory store");
        todo_server::serve(listener, MemoryStore::new()).await
    } else {
        info!(db = ?config.db, "using PostgreSQL store");
        todo_server::serve(listener, PgStore::new(&config.db)).await
    }
}
