//! Chatflow - a terminal editor for chatbot conversation flows
//!
//! A flow is an ordered list of message nodes. Each node carries its text,
//! optional media, quick-reply buttons, send delay, targeting conditions,
//! tags and delivery analytics.
//!
//! # Features
//! - **cli**: one-shot subcommands (list, show, add, tag, ...)
//! - **tui**: the interactive editor (default)
//!
//! # Architecture
//! - `flow`: data model and the `FlowStore` mutator
//! - `services`: filtering, node/condition editing, media upload, analytics, preview
//! - `repository`: flow persistence (JSON file or in-memory)
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `config`: configuration management
//! - `runtime`: startup and execution modes
//! - `system`: logging

pub mod cli;
pub mod config;
pub mod errors;
pub mod flow;
pub mod interfaces;
pub mod repository;
pub mod runtime;
pub mod services;
pub mod system;
