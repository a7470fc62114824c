//! Log file setup.
//!
//! The dashboard owns the terminal, so tracing output goes to a file instead
//! of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "CFO_HELPER_LOG";

/// Default log location under the user's cache directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("cfo-helper").join("cfo-helper.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `log_file` (or the default path).
///
/// Returns the path in use, or `None` when no log file could be opened, in
/// which case logging stays disabled.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Option<PathBuf> {
    let path = log_file.map(Path::to_path_buf).or_else(default_log_path)?;
    let file = open_log_file(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}
