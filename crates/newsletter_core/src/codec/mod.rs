//! Text codecs for the newsletter persistence format.
//!
//! # Responsibility
//! - Own the grammar of the line-oriented document format.
//! - Keep rendering and persisted form identical for items.
//!
//! # Invariants
//! - One record per line; `\n` is never part of a record.

pub mod line;
