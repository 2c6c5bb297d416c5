//! Persistence contracts for newsletters.
//!
//! # Responsibility
//! - Define the storage seam used by `Newsletter::save` / `Newsletter::load`.
//! - Report I/O failures and unstorable records as typed values.
//!
//! # Invariants
//! - A failed load never mutates the target newsletter.
//! - Stores release every file handle before returning, on success or error.

use crate::model::newsletter::Newsletter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod file_store;

pub use file_store::{FileNewsletterStore, LoadReport, SkippedLine};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting or restoring a newsletter.
#[derive(Debug)]
pub enum StoreError {
    /// Target could not be opened (missing, permissions, bad directory).
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Target was opened but reading failed (including invalid UTF-8).
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing or flushing the document failed part-way.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Title or item contains `\n` or `\r` and cannot be stored as one line.
    /// `line` is the 1-based line the record would occupy.
    InvalidRecord { path: PathBuf, line: usize },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::InvalidRecord { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open `{}`: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::InvalidRecord { path, line } => write!(
                f,
                "refusing to write `{}`: line {line} contains a line break",
                path.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
            Self::InvalidRecord { .. } => None,
        }
    }
}

/// Storage interface for whole-document newsletter persistence.
pub trait NewsletterStore {
    /// Persists `newsletter`, fully replacing previously stored content.
    fn save(&self, newsletter: &Newsletter) -> StoreResult<()>;
    /// Replaces title and items of `newsletter` with stored content.
    fn load_into(&self, newsletter: &mut Newsletter) -> StoreResult<LoadReport>;
}
