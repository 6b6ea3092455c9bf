//! `log` facade example
//!
//! Routes `log::info!` and friends through a console handler.
//!
//! Run with: cargo run --example log_facade

use rust_console_handler::bridge;
use rust_console_handler::prelude::*;

fn main() {
    println!("=== Rust Console Handler - log Facade Example ===\n");

    let opts = HandlerOptions::new()
        .with_level(bridge::TRACE)
        .with_add_source(true);
    if let Err(e) = bridge::init(ConsoleHandler::new(Some(opts), []), log::LevelFilter::Trace) {
        eprintln!("failed to install logger: {}", e);
        return;
    }

    log::trace!("trace renders as {}", bridge::TRACE);
    log::debug!("debug message");
    log::info!("listening on {}", "0.0.0.0:8080");
    log::warn!("disk usage at {}%", 85);
    log::error!("connection refused");

    println!("\n=== Example completed successfully! ===");
}
