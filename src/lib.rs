//! unit-admin
//!
//! Vim-style terminal admin page for apartment unit records kept by a REST
//! backend.

pub mod app;
pub mod input;
pub mod logging;
pub mod ui;
pub mod units;
