//! Experience Service - Main Entry Point
//!
//! Loads configuration and the seed, then starts the web API server.

use experience_api::{api::run_server, ServerConfig, ServerError};
use std::process;
use std::sync::Arc;

/// Print the error and terminate with a failing status
fn exit_with(err: ServerError) -> ! {
    eprintln!("{}", err.exit_message());
    process::exit(1);
}

#[actix_web::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().unwrap_or_else(|e| exit_with(e));
    let store = config.build_store().unwrap_or_else(|e| exit_with(e));
    log::info!("Experience store ready with {} records", store.len());

    if let Err(e) = run_server(&config, Arc::new(store)).await {
        exit_with(e.into());
    }
}
