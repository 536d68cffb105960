//! # StudyStats Core Library
//!
//! This library provides the core logic for StudyStats, a small toolkit for
//! looking at study sessions. All operations are exposed through the
//! standalone `studystats` CLI, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Statistics**: pure functions over observation sets (mean, median,
//!   reading speed, focus score) and session summaries built from them
//! - **Input**: parsing of raw observations into numbers
//! - **Storage**: TOML-based configuration
//! - **API / Table**: a small HTTP client and helpers for tabulating JSON
//!   records it returns
//!
//! ## Key Components
//!
//! - [`summarize`] / [`render`]: session summary and its text form
//! - [`ApiClient`]: HTTP client bound to a base URL
//! - [`Table`]: column-ordered view of JSON records
//! - [`Config`]: Application configuration management

pub mod api;
pub mod error;
pub mod input;
pub mod logging;
pub mod stats;
pub mod storage;
pub mod table;

pub use api::{ApiClient, ApiResponse, RequestOptions};
pub use error::{ApiError, ConfigError, CoreError, Result, TableError};
pub use input::{parse_observation, parse_observations};
pub use stats::{
    analyze_session, effective_study_time, focus_score, mean, median, pages_per_hour, render,
    render_session, summarize, SessionInput, SessionSummary, SingleSessionStats,
};
pub use storage::{ApiConfig, Config, LoggingConfig, PromptConfig, TableConfig};
pub use table::{Row, Table};
