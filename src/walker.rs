use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::detection::ExtensionFilter;
use crate::error::CleanError;
use crate::normalize::normalize;

/// How scan outcomes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Only the paths of modified files, no labels.
    Bare,
    /// A labeled line for every modified file.
    #[default]
    Default,
    /// Like `Default`, plus a line for every file left unchanged.
    Verbose,
}

impl OutputMode {
    /// Resolve the mode from command-line flags. `bare` wins over `verbose`.
    pub fn from_flags(bare: bool, verbose: bool) -> Self {
        match (bare, verbose) {
            (true, _) => Self::Bare,
            (false, true) => Self::Verbose,
            (false, false) => Self::Default,
        }
    }

    /// The report line for one file, or `None` if this mode stays silent.
    pub fn render(self, path: &Path, status: FileStatus) -> Option<String> {
        match (self, status) {
            (Self::Bare, FileStatus::Changed) => Some(path.display().to_string()),
            (_, FileStatus::Changed) => Some(format!("cleaning: {}", path.display())),
            (Self::Verbose, FileStatus::Unchanged) => {
                Some(format!("skipped:  {}", path.display()))
            }
            (_, FileStatus::Unchanged) => None,
        }
    }
}

/// Options controlling a scan.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Which files are scanned.
    pub extensions: ExtensionFilter,
    /// How outcomes are reported.
    pub mode: OutputMode,
}

/// Outcome of cleaning one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was rewritten with normalized content.
    Changed,
    /// The file was already normalized and left untouched.
    Unchanged,
}

/// Counts for a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files whose name matched the extension filter.
    pub scanned: usize,
    /// Files rewritten with normalized content.
    pub changed: usize,
    /// Files already normalized.
    pub unchanged: usize,
}

/// Normalize a single file in place.
///
/// The file is only written when its normalized content differs.
pub fn clean_file(path: &Path) -> Result<FileStatus, CleanError> {
    let data = fs::read(path).map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let original = String::from_utf8(data).map_err(|_| CleanError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    let cleaned = normalize(&original).map_err(|e| CleanError::InvalidLineEnding {
        path: path.to_path_buf(),
        line: e.line,
    })?;

    if cleaned == original {
        return Ok(FileStatus::Unchanged);
    }

    fs::write(path, cleaned).map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileStatus::Changed)
}

/// Collapse `.` and `..` components without touching the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Clean every matching file beneath `root`, writing report lines to `out`.
///
/// Directory entries are visited in file-name order. The first error stops
/// the scan; files cleaned before it stay cleaned.
pub fn scan<W: Write>(
    root: &Path,
    options: &CleanOptions,
    out: &mut W,
) -> Result<ScanSummary, CleanError> {
    let invalid_root = || CleanError::InvalidRoot {
        path: root.to_path_buf(),
    };
    let root = std::path::absolute(root)
        .map(|p| lexical_normalize(&p))
        .map_err(|_| invalid_root())?;
    if !root.is_dir() {
        return Err(invalid_root());
    }
    debug!(root = %root.display(), extensions = ?options.extensions.suffixes(), "scanning");

    let mut summary = ScanSummary::default();

    for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // Symlinked directories are not descended into. Every other symlink,
        // dangling ones included, goes through clean_file like a regular file.
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && !path.is_dir());
        if !is_file {
            continue;
        }
        if !options.extensions.matches(path) {
            trace!(path = %path.display(), "extension not matched");
            continue;
        }

        let status = clean_file(path)?;
        debug!(path = %path.display(), ?status, "cleaned");

        summary.scanned += 1;
        match status {
            FileStatus::Changed => summary.changed += 1,
            FileStatus::Unchanged => summary.unchanged += 1,
        }

        if let Some(line) = options.mode.render(path, status) {
            writeln!(out, "{line}").map_err(CleanError::Report)?;
        }
    }

    debug!(
        scanned = summary.scanned,
        changed = summary.changed,
        unchanged = summary.unchanged,
        "scan complete"
    );
    Ok(summary)
}
