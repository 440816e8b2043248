//! Provides input/output functionality for simulation logs, structure files and records.
//!
//! The two log layouts handled here are free text meant for human inspection. Every
//! value is pulled out through a named [`fields::LogField`], so a change in layout
//! surfaces as an error naming the field instead of a silently misparsed number.

pub mod cursor;
pub mod ensemble;
pub mod fields;
pub mod record;
pub mod sdf;
pub mod thermo;
pub mod traits;
