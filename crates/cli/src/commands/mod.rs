//! Subcommand implementations.

pub mod bits;
pub mod eval;
pub mod sweep;
