//! Numerical analysis of parsed data: conformer energy tallies, graph-pattern counts and
//! 3-D shape descriptors computed from coordinates.

pub mod patterns;
pub mod shape;
pub mod thresholds;
