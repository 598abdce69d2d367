//! Diagnostic stream output.
//!
//! Everything here goes to the secondary stream so that stdout carries only
//! the pasteable safelist block. Lines are written plain; only the optional
//! verbose trace is coloured.

use crate::error::SafelistError;
use crate::scan::ScanReport;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Writes the line for a run-ending condition (missing dir, no templates).
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_fatal(w: &mut impl Write, err: &SafelistError) -> io::Result<()> {
    let level = match err {
        SafelistError::NoTemplates { .. } => "Warning",
        _ => "Error",
    };
    writeln!(w, "# {level}: {err}")
}

/// Writes the line for a template that could not be read.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_file_error(w: &mut impl Write, path: &Path, err: &SafelistError) -> io::Result<()> {
    writeln!(w, "# Error processing {}: {err}", path.display())
}

/// Verbose per-file trace.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_trace(w: &mut impl Write, path: &Path, found: usize) -> io::Result<()> {
    let line = format!("# Scanning {} ({found} classes)", path.display());
    writeln!(w, "{}", line.dimmed())
}

/// Verbose note for directory entries that could not be listed.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_walk_warning(w: &mut impl Write, dir: &Path, errors: usize) -> io::Result<()> {
    writeln!(w, "# WARN: Encountered {errors} errors while listing {}", dir.display())
}

/// Writes the statistics block that follows a successful run.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_statistics(w: &mut impl Write, report: &ScanReport) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "# Statistics:")?;
    writeln!(w, "#   Template files scanned: {}", report.files_scanned)?;
    writeln!(w, "#   Total unique classes: {}", report.classes.len())?;
    writeln!(w, "#")?;
    writeln!(w, "# Copy the safelist array above to your tailwind.config.js")
}
