// src/scan.rs
//! The scan pipeline: discover, extract, union, format, emit.

use crate::config::ScanConfig;
use crate::discovery;
use crate::error::Result;
use crate::exit::SafelistExit;
use crate::extract;
use crate::reporting;
use crate::safelist;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

/// A template that was skipped because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of scanning one template directory.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub classes: BTreeSet<String>,
    /// Every discovered template, including ones that failed to read.
    pub files_scanned: usize,
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    #[must_use]
    pub fn safelist(&self) -> String {
        safelist::format_safelist(&self.classes)
    }
}

/// Scans every template in `config.template_dir` and unions their classes.
///
/// Unreadable templates are reported on `diag` and skipped.
///
/// # Errors
/// Returns `TemplateDirNotFound` / `NoTemplates` when there is nothing to
/// scan, or an error if `diag` cannot be written.
pub fn scan(config: &ScanConfig, diag: &mut impl Write) -> Result<ScanReport> {
    let files = discovery::discover(config, diag)?;
    let mut report = ScanReport {
        files_scanned: files.len(),
        ..ScanReport::default()
    };

    for path in files {
        match extract::extract_file(&path) {
            Ok(classes) => {
                if config.verbose {
                    reporting::write_trace(diag, &path, classes.len())?;
                }
                report.classes.extend(classes);
            }
            Err(e) => {
                reporting::write_file_error(diag, &path, &e)?;
                report.failures.push(FileFailure {
                    message: e.to_string(),
                    path,
                });
            }
        }
    }

    Ok(report)
}

/// Runs a full scan, writing the safelist to `out` and diagnostics to `diag`.
///
/// A missing template directory or an empty one is reported on `diag` and
/// yields `MissingTemplates` with nothing written to `out`.
///
/// # Errors
/// Returns error on a directory walk failure or if either writer fails.
pub fn run(config: &ScanConfig, out: &mut impl Write, diag: &mut impl Write) -> Result<SafelistExit> {
    let report = match scan(config, diag) {
        Ok(report) => report,
        Err(e) if e.is_missing_templates() => {
            reporting::write_fatal(diag, &e)?;
            return Ok(SafelistExit::MissingTemplates);
        }
        Err(e) => return Err(e),
    };

    writeln!(out, "{}", report.safelist())?;
    out.flush()?;
    reporting::write_statistics(diag, &report)?;
    Ok(SafelistExit::Success)
}
