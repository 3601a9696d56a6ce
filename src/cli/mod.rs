//! Terminal rendering of each view

pub mod dashboard;
pub mod detail;
pub mod landing;
pub mod saved;
pub mod search;
pub mod session;
pub mod setup;
pub mod ui;
