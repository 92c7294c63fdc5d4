//! mockdrill-report — report export.
//!
//! File output lives here rather than in `mockdrill-core` so the core
//! stays free of I/O: this crate turns a compiled report (plus the session
//! transcript) into a self-contained HTML page or a pretty-printed JSON
//! file.

pub mod html;
pub mod json;
