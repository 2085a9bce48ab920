//! CLI command implementations.

pub mod extract;
pub mod solo;
pub mod team;
