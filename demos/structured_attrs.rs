//! Structured attributes example
//!
//! Demonstrates the indented attribute block, groups, derived loggers and
//! attribute rewriting.
//!
//! Run with: cargo run --example structured_attrs

use rust_console_handler::prelude::*;
use rust_console_handler::{info, warn};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Console Handler - Structured Attributes Example ===\n");

    let opts = HandlerOptions::new().with_replace_attr(|_groups, attr| {
        // Never print credentials.
        if attr.key == "password" {
            return Some(Attr::new("password", "[REDACTED]"));
        }
        Some(attr)
    });
    let logger = Logger::new(ConsoleHandler::new(Some(opts), [with_escape_html(true)]));

    println!("1. Flat attributes:");
    info!(logger, "request"; "status" => 200, "path" => "/x", "latency" => Duration::from_millis(12));

    println!("\n2. Reserved keys are not repeated in the block:");
    info!(logger, "collision"; "time" => "yesterday", "msg" => "dup", "kept" => true);

    println!("\n3. Groups and derived loggers:");
    let db = logger
        .with(vec![Attr::new("service", "billing")])
        .with_group("db");
    warn!(db, "slow query"; "table" => "invoices", "rows" => 1024);
    db.info(
        "pool",
        vec![Attr::group("conn", vec![Attr::new("open", 4), Attr::new("idle", 1)])],
    );

    println!("\n4. Serializable values and HTML escaping:");
    let payload = Value::from_serialize(&serde_json::json!({"tags": ["a", "b"], "html": "<b>"}))?;
    logger.info("payload", vec![Attr::new("body", payload), Attr::new("password", "hunter2")]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
