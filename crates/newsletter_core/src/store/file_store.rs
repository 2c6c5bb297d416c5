//! Flat-file newsletter store.
//!
//! # Responsibility
//! - Write the rendered document to a single text file.
//! - Read a text file back, decoding the title line and one item per line.
//!
//! # Invariants
//! - Save truncates; there is no append mode and no backup.
//! - Save refuses records containing `\n` or `\r` before touching the file.
//! - Load reads the whole file before touching the target newsletter.
//! - Lines that fail to decode are skipped and reported, never stored.
//! - Log events carry counts and durations only, never item content.

use super::{NewsletterStore, StoreError, StoreResult};
use crate::codec::line::{decode_title, encode, encode_title, try_decode, DecodeError};
use crate::model::item::Item;
use crate::model::newsletter::Newsletter;
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Item line that was dropped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub reason: DecodeError,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub items_loaded: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty()
    }
}

/// Newsletter store backed by one file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNewsletterStore {
    path: PathBuf,
}

impl FileNewsletterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, newsletter: &Newsletter) -> StoreResult<()> {
        self.check_single_line_records(newsletter)?;

        let file = File::create(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        writeln!(writer, "{}", encode_title(newsletter.title())).map_err(write_err)?;
        for item in newsletter.items() {
            writeln!(writer, "{}", encode(item)).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
        Ok(())
    }

    fn check_single_line_records(&self, newsletter: &Newsletter) -> StoreResult<()> {
        let records = std::iter::once(newsletter.title())
            .chain(newsletter.items().iter().map(Item::content));
        for (index, record) in records.enumerate() {
            if record.contains(['\n', '\r']) {
                return Err(StoreError::InvalidRecord {
                    path: self.path.clone(),
                    line: index + 1,
                });
            }
        }
        Ok(())
    }

    fn read_document(&self) -> StoreResult<(Newsletter, LoadReport)> {
        let file = File::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut title = String::new();
        let mut items = Vec::<Item>::new();
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
            if index == 0 {
                title = decode_title(&line);
                continue;
            }
            match try_decode(&line) {
                Ok(item) => items.push(item),
                Err(reason) => report.skipped_lines.push(SkippedLine {
                    line_number: index + 1,
                    reason,
                }),
            }
        }

        report.items_loaded = items.len();
        Ok((Newsletter::with_items(title, items), report))
    }
}

impl NewsletterStore for FileNewsletterStore {
    fn save(&self, newsletter: &Newsletter) -> StoreResult<()> {
        let started_at = Instant::now();
        info!(
            "event=newsletter_save module=store status=start path={}",
            self.path.display()
        );

        match self.write_document(newsletter) {
            Ok(()) => {
                info!(
                    "event=newsletter_save module=store status=ok duration_ms={} items={}",
                    started_at.elapsed().as_millis(),
                    newsletter.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=newsletter_save module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn load_into(&self, newsletter: &mut Newsletter) -> StoreResult<LoadReport> {
        let started_at = Instant::now();
        info!(
            "event=newsletter_load module=store status=start path={}",
            self.path.display()
        );

        let (loaded, report) = match self.read_document() {
            Ok(result) => result,
            Err(err) => {
                error!(
                    "event=newsletter_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        if !report.is_clean() {
            warn!(
                "event=newsletter_load module=store status=partial skipped_lines={}",
                report.skipped_lines.len()
            );
        }
        info!(
            "event=newsletter_load module=store status=ok duration_ms={} items={}",
            started_at.elapsed().as_millis(),
            report.items_loaded
        );

        *newsletter = loaded;
        Ok(report)
    }
}
