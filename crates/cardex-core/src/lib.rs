//! Shared types and pure helpers for the cardex contact exporter.

pub mod config;
pub mod constants;
pub mod date;
pub mod digits;
pub mod error;
pub mod timestamp;
pub mod types;
