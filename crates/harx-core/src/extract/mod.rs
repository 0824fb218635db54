//! The extraction loop: one pass over the archive, one file per body.
//!
//! Per-entry failures (bad base64, unwritable file) are logged and the
//! loop moves on; only loading the archive or creating the output
//! directory can abort the run.

mod decode;

pub use decode::{decode_body, DecodeError};

use std::path::Path;

use crate::har::{self, HarEntry, LoadError};
use crate::url_model::derive_output_filename;

/// Outcome counters for one extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Files written to the output directory.
    pub saved: usize,
    /// Entries with no captured body text (silent skip).
    pub skipped_no_body: usize,
    /// Entries whose base64 body failed to decode.
    pub decode_failures: usize,
    /// Entries whose output file could not be written.
    pub write_failures: usize,
}

/// Extracts every response body from the archive at `har_path` into
/// `output_dir`, creating the directory first if needed.
///
/// Entries are processed strictly in archive order. Colliding filenames
/// are overwritten by the later entry. Progress is printed to stdout;
/// per-entry failures go through `tracing` and never abort the run.
pub fn extract_archive(har_path: &Path, output_dir: &Path) -> Result<ExtractReport, LoadError> {
    std::fs::create_dir_all(output_dir).map_err(|source| LoadError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let archive = har::load_archive(har_path)?;

    let mut report = ExtractReport::default();
    for (index, entry) in archive.log.entries.iter().enumerate() {
        process_entry(entry, index, output_dir, &mut report);
    }
    Ok(report)
}

fn process_entry(entry: &HarEntry, index: usize, output_dir: &Path, report: &mut ExtractReport) {
    let content = match entry.response.as_ref().and_then(|r| r.content.as_ref()) {
        Some(content) => content,
        None => {
            report.skipped_no_body += 1;
            return;
        }
    };

    let url = entry.request.url.as_str();
    let data = match decode_body(content) {
        Ok(Some(data)) => data,
        Ok(None) => {
            report.skipped_no_body += 1;
            return;
        }
        Err(err) => {
            tracing::warn!("could not decode body from {url}: {err}, skipping");
            report.decode_failures += 1;
            return;
        }
    };

    let filename = derive_output_filename(url, index);
    let save_path = output_dir.join(&filename);
    match std::fs::write(&save_path, &data) {
        Ok(()) => {
            println!("Saved: {}", save_path.display());
            report.saved += 1;
        }
        Err(err) => {
            tracing::error!("could not write {}: {err}", save_path.display());
            report.write_failures += 1;
        }
    }
}

impl ExtractReport {
    /// One-line human summary, printed by the CLI at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "{} saved, {} without body, {} decode failures, {} write failures",
            self.saved, self.skipped_no_body, self.decode_failures, self.write_failures
        )
    }
}
