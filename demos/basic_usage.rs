//! Basic console handler usage example
//!
//! Demonstrates the colorized line layout and the different log levels.
//!
//! Run with: cargo run --example basic_usage

use rust_console_handler::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Console Handler - Basic Usage Example ===\n");

    let level = LevelVar::new(LogLevel::DEBUG);
    let handler = ConsoleHandler::new(Some(HandlerOptions::new().with_level(level.clone())), []);
    let logger = Logger::new(handler);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", vec![]);
    logger.info("This is an info message", vec![]);
    logger.warn("This is a warning message", vec![]);
    logger.error("This is an error message", vec![]);
    logger.log(LogLevel::new(2), "This is a custom level between INFO and WARN", vec![]);

    println!("\n2. Raising the minimum level at runtime:");
    level.set(LogLevel::WARN);
    println!("   Minimum level set to WARN - debug and info won't show:");
    logger.debug("Debug message (hidden)", vec![]);
    logger.info("Info message (hidden)", vec![]);
    logger.warn("Warning message (visible)", vec![]);

    println!("\n3. Custom time format without colors:");
    let plain = Logger::new(ConsoleHandler::new(
        None,
        [with_time_format("%H:%M:%S%.3f"), with_colors(false)],
    ));
    plain.info("Plain output for log files and pipes", vec![]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
