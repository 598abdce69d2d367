// src/discovery.rs
use crate::config::ScanConfig;
use crate::error::{Result, SafelistError};
use crate::reporting;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every entry directly inside `config.template_dir` whose name ends in
/// the template extension.
///
/// The listing is flat and sorted by file name. Entries are not checked for
/// readability here: a dangling symlink or a directory named `x.ut` is still
/// returned so the read step can report it.
///
/// # Errors
/// Returns `TemplateDirNotFound` if the directory is missing, `NoTemplates`
/// if it holds no matching entries, or a walk error if it cannot be listed or
/// `diag` cannot be written.
pub fn discover(config: &ScanConfig, diag: &mut impl Write) -> Result<Vec<PathBuf>> {
    let dir = &config.template_dir;
    if !dir.exists() {
        return Err(SafelistError::TemplateDirNotFound { path: dir.clone() });
    }

    let (files, errors) = list_templates(dir, &config.extension)?;
    if errors > 0 && config.verbose {
        reporting::write_walk_warning(diag, dir, errors)?;
    }
    if files.is_empty() {
        return Err(SafelistError::NoTemplates {
            path: dir.clone(),
            extension: config.extension.clone(),
        });
    }
    Ok(files)
}

fn list_templates(dir: &Path, extension: &str) -> Result<(Vec<PathBuf>, usize)> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    let suffix = format!(".{extension}");
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if has_suffix(entry.path(), &suffix) {
                    paths.push(entry.into_path());
                }
            }
            // Root unreadable: nothing to salvage.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            // Broken symlink: keep it, the read will fail and be reported.
            Err(e) => match e.path() {
                Some(path) if has_suffix(path, &suffix) => paths.push(path.to_path_buf()),
                _ => errors += 1,
            },
        }
    }
    Ok((paths, errors))
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
