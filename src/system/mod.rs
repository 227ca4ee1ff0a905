//! System-level modules
//!
//! - Logging initialization (tracing subscriber plus file appender)

pub mod logging;
