//! Core domain logic for newsletters.
//! This crate owns the item model, the line format and file persistence.

pub mod codec;
pub mod logging;
pub mod model;
pub mod store;

pub use codec::line::{decode, encode, try_decode, DecodeError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::item::{Item, ItemKind};
pub use model::newsletter::Newsletter;
pub use store::{
    FileNewsletterStore, LoadReport, NewsletterStore, SkippedLine, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
