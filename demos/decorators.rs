//! Handler decorator example
//!
//! Demonstrates configuring a handler through a wrapper, filtering by level,
//! buffering until shutdown and sampling noisy records.
//!
//! Run with: cargo run --example decorators

use rust_log_pipeline::formatters::LineFormatter;
use rust_log_pipeline::prelude::*;
use rust_log_pipeline::processors::TagProcessor;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - Decorators Example ===\n");

    // The wrapper forwards configuration to the handler it owns
    let console = HandlerWrapper::new(StreamHandler::console(LogLevel::Debug));
    console
        .with_formatter(Arc::new(LineFormatter::with_template(
            "%channel%.%level_name%: %message% %extra%",
        )))?
        .with_processor(Arc::new(TagProcessor::new(["demo"])))?;

    // A null handler has no formatter, so the wrapper reports the mismatch
    let null = HandlerWrapper::new(NullHandler::default());
    if let Err(e) = null.formatter() {
        println!("Expected failure: {}", e);
    }

    let errors = FilterHandler::new(
        StreamHandler::console(LogLevel::Debug),
        LogLevel::Error,
        LogLevel::Emergency,
    )
    .with_bubble(false);
    let buffered = BufferHandler::new(StreamHandler::console(LogLevel::Debug), LogLevel::Info)
        .with_buffer_limit(100);
    let sampled = SamplingHandler::new(console, 0.25);

    let logger = Logger::builder("demo")
        .handler(sampled)
        .handler(buffered)
        .handler(errors)
        .build();

    println!("1. Errors stop at the filter, everything else is buffered and sampled:");
    for i in 0..8 {
        logger.info(format!("request {} served", i));
    }
    logger.error("payment provider timed out");

    println!("\n2. Closing the logger flushes the buffer:");
    logger.close();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
