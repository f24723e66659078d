//! Basic logger usage example
//!
//! Demonstrates a logger with a console handler and the different log levels.
//!
//! Run with: cargo run --example basic_usage

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::processors::PlaceholderProcessor;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - Basic Usage Example ===\n");

    let console = Arc::new(StreamHandler::console(LogLevel::Debug));
    let logger = Logger::builder("app")
        .shared_handler(console.clone())
        .processor(Arc::new(PlaceholderProcessor::new()))
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.notice("This is a notice message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");
    logger.alert("This is an alert message");
    logger.emergency("This is an emergency message");

    println!("\n2. Raising the handler threshold to WARNING:");
    console.set_level(LogLevel::Warning);
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n3. Structured context with placeholders:");
    logger.log_with_context(
        LogLevel::Warning,
        "User {user} exceeded quota",
        LogContext::new()
            .with_field("user", "alice")
            .with_field("quota_mb", 512),
    );

    println!("\n4. A second channel sharing the same handlers:");
    let audit = logger.with_name("audit");
    audit.error("Audit trail write failed");

    logger.close();
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
