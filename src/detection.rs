use std::path::Path;

/// File-name suffixes scanned when none are given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".swift", ".py", ".sh", ".json"];

/// Decides which files a scan touches, by file-name suffix.
///
/// Matching is a plain, case-sensitive `ends_with` on the file name, so
/// `.json` matches `package.json` but not `DATA.JSON`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtensionFilter {
    /// Build a filter from user-supplied extensions.
    ///
    /// A missing leading dot is added (`py` becomes `.py`). Returns `None` if
    /// the list is empty or any entry is blank.
    pub fn new<I, S>(extensions: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim();
            if ext.is_empty() || ext == "." {
                return None;
            }
            let suffix = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            };
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        if suffixes.is_empty() {
            None
        } else {
            Some(Self { suffixes })
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether the file name of `path` ends with one of the suffixes.
    ///
    /// Names need not be valid UTF-8; the comparison is on raw bytes.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.as_encoded_bytes();
        self.suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
    }
}
