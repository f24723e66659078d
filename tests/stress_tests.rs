//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Records from many threads are all delivered through a shared logger
//! - Handler stack changes while logging do not lose or corrupt records
//! - Decorators hold up under concurrent use

use rust_log_pipeline::handlers::{BufferHandler, HandlerWrapper, TestHandler};
use rust_log_pipeline::prelude::*;
use rust_log_pipeline::processors::ThreadProcessor;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

#[test]
fn test_concurrent_logging_delivers_everything() {
    let capture = Arc::new(TestHandler::capturing(LogLevel::Debug));
    let logger = Arc::new(
        Logger::builder("stress")
            .handler(HandlerWrapper::new(Arc::clone(&capture)))
            .processor(Arc::new(ThreadProcessor::new()))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let records = capture.records();
    assert_eq!(records.len(), THREADS * PER_THREAD);

    let unique: HashSet<&str> = records.iter().map(|r| r.message()).collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert!(records.iter().all(|r| r.extra().contains_key("thread_id")));
}

#[test]
fn test_handler_stack_changes_while_logging() {
    let capture = Arc::new(TestHandler::capturing(LogLevel::Debug));
    let logger = Arc::new(Logger::builder("stress").shared_handler(capture.clone()).build());

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.warning(format!("message {}", i));
            }
        })
    };
    let mutator = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for _ in 0..PER_THREAD {
                logger.push_handler(Arc::new(TestHandler::capturing(LogLevel::Debug)));
                logger.pop_handler().expect("handler was just pushed");
            }
        })
    };

    writer.join().expect("writer panicked");
    mutator.join().expect("mutator panicked");

    // Pushed handlers bubble, so the bottom handler sees every record
    assert_eq!(capture.len(), PER_THREAD);
    assert_eq!(logger.handlers().len(), 1);
}

#[test]
fn test_concurrent_buffer_flushes() {
    let capture = Arc::new(TestHandler::capturing(LogLevel::Debug));
    let buffer = Arc::new(
        BufferHandler::new(Arc::clone(&capture), LogLevel::Debug)
            .with_buffer_limit(64)
            .with_flush_on_overflow(true),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let record = LogRecord::new(LogLevel::Info, "stress", format!("{}:{}", t, i));
                    buffer.handle(&record).expect("buffer accepts records");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("buffering thread panicked");
    }

    buffer.close().unwrap();
    assert_eq!(capture.len(), THREADS * PER_THREAD);
}
