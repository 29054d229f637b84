//! Hexfire - deterministic 2d6 tabletop combat resolution
//!
//! Computes to-hit target numbers, resolves attacks into damage packets,
//! and runs skill checks. All randomness comes from a caller-supplied
//! [`dice::RollSource`].

pub mod catalog;
pub mod combat;
pub mod core;
pub mod dice;
