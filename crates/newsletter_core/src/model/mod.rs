//! Domain model for newsletters and their content items.
//!
//! # Responsibility
//! - Define the value types core logic operates on.
//!
//! # Invariants
//! - A newsletter exclusively owns its items; nothing holds a back-reference.
//! - Copies are always deep.

pub mod item;
pub mod newsletter;
