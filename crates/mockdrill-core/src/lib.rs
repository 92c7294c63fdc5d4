//! mockdrill-core — interview session engine, scoring, and reporting.
//!
//! This crate defines the question bank, the answer evaluator, the report
//! compiler, and the session state machine that the rest of the mockdrill
//! system builds on. Everything here is pure, synchronous computation: no
//! file or terminal I/O, no shared state between sessions.

pub mod bank;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
