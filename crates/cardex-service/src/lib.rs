//! Contact export pipeline.
//!
//! Turns spreadsheet rows into Google contacts CSV or vCard 3.0 text, and
//! cleans phone cells down to raw digits.

pub mod cleanup;
pub mod error;
pub mod export;
