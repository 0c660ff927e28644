//! `DeskChat` — line-oriented shell over the in-memory messaging core.

pub mod commands;
pub mod config;
pub mod session;
