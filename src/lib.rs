pub mod detection;
pub mod error;
pub mod normalize;
pub mod walker;

pub use detection::{DEFAULT_EXTENSIONS, ExtensionFilter};
pub use error::CleanError;
pub use normalize::{InvalidLineEnding, is_normalized, normalize};
pub use walker::{CleanOptions, FileStatus, OutputMode, ScanSummary, clean_file, scan};
