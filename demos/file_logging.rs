//! File logging example
//!
//! Demonstrates logging to the console and to a JSON file at the same time.
//!
//! Run with: cargo run --example file_logging

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::processors::{ThreadProcessor, UidProcessor};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - File Logging Example ===\n");

    let file = FileHandler::open("application.log", LogLevel::Debug)?
        .with_formatter(Arc::new(JsonFormatter::new()))
        .with_processor(Arc::new(ThreadProcessor::new()));

    let logger = Logger::builder("app")
        .handler(file)
        .handler(StreamHandler::console(LogLevel::Info))
        .processor(Arc::new(UidProcessor::new(12)?))
        .build();

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");
    logger.info("Application initialization complete");

    logger.close();

    println!("\n2. Check 'application.log' for the JSON lines");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
