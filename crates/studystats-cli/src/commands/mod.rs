pub mod api;
pub mod config;
pub mod interactive;
pub mod session;
pub mod summarize;
