//! Directory scanner for exported content
//!
//! Walks a directory of stored content strings (one per file), classifies
//! every file and tallies content kinds and structured block kinds.

use crate::detector::{classify, Content, ContentKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors that can occur while scanning a directory
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory
    #[error("Not a directory: {path}", path = .0.display())]
    NotADirectory(PathBuf),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Aggregate classification results for a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of files classified
    pub files: usize,
    /// Files per content kind
    pub kinds: BTreeMap<ContentKind, usize>,
    /// Blocks per kind name, across all structured files
    pub block_kinds: BTreeMap<&'static str, usize>,
    /// Files that could not be read as UTF-8 text
    pub unreadable: Vec<PathBuf>,
}

impl ScanReport {
    /// Number of files of the given kind
    pub fn count(&self, kind: ContentKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }

    fn record(&mut self, scanned: FileScan) {
        match scanned {
            FileScan::Classified { kind, block_kinds } => {
                self.files += 1;
                *self.kinds.entry(kind).or_insert(0) += 1;
                for (name, count) in block_kinds {
                    *self.block_kinds.entry(name).or_insert(0) += count;
                }
            }
            FileScan::Unreadable(path) => self.unreadable.push(path),
        }
    }
}

/// Outcome for a single file
enum FileScan {
    Classified {
        kind: ContentKind,
        block_kinds: BTreeMap<&'static str, usize>,
    },
    Unreadable(PathBuf),
}

/// Scan every regular file under `root`
///
/// # Parameters
/// * `root` - Directory containing one stored content string per file
///
/// # Returns
/// * `Ok(ScanReport)` - Counts for all readable files; unreadable files are listed
/// * `Err(ScanError)` - `root` is not a directory or the walk failed
pub fn scan_directory(root: &Path) -> Result<ScanReport, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }

    #[cfg(feature = "parallel")]
    let scanned: Vec<FileScan> = paths.par_iter().map(|path| scan_file(path)).collect();

    #[cfg(not(feature = "parallel"))]
    let scanned: Vec<FileScan> = paths.iter().map(|path| scan_file(path)).collect();

    let mut report = ScanReport::default();
    for file in scanned {
        report.record(file);
    }

    log::info!(
        "Scanned {} files under {} ({} unreadable)",
        report.files,
        root.display(),
        report.unreadable.len()
    );

    Ok(report)
}

fn scan_file(path: &Path) -> FileScan {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return FileScan::Unreadable(path.to_path_buf());
        }
    };

    let classified = classify(&content);
    let block_kinds = match &classified {
        Content::Structured(doc) => doc.block_counts(),
        _ => BTreeMap::new(),
    };
    log::debug!("{}: {}", path.display(), classified.kind());

    FileScan::Classified {
        kind: classified.kind(),
        block_kinds,
    }
}
