//! Core business logic abstractions

pub mod config;
pub mod detail;
pub mod format;
pub mod fund;
pub mod log;
pub mod notice;
pub mod route;
pub mod saved;
pub mod search;
pub mod session;
pub mod storage;

// Re-export main types for cleaner imports
pub use fund::{FundDetails, FundProvider, FundSummary, NavPoint, SchemeMeta};
pub use route::Route;
pub use storage::KeyValueStorage;
