pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod storage;
pub mod types;

// Application flow and its ports
pub mod app;
// Adapters for the real network and terminal
pub mod infra;
