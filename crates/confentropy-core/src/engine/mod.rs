//! # Engine Module
//!
//! Per-molecule bookkeeping shared by the extraction workflows.
//!
//! - **Configuration** ([`config`]) - Corpus root, run label and file naming layout
//! - **Record Assembly** ([`assemble`]) - The emit decision for a single molecule
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine errors and the skip reasons they map to

pub mod assemble;
pub mod config;
pub mod error;
pub mod progress;
