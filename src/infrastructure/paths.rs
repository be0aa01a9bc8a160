//! Path handling for the Zellij sandbox.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the data directory holding the log file.
///
/// Resolves to `~/.local/share/zellij/autoselect` on the host when Zellij
/// was started from the home directory.
///
/// # Examples
///
/// ```
/// use autoselect::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/autoselect"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("autoselect")
}

/// Expands tilde paths to the `/host` prefix.
///
/// # Examples
///
/// ```
/// use autoselect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/fruit.toml"), "/host/fruit.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/fruit.toml"), "/etc/fruit.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Turns a configured file path into a sandbox path.
///
/// Tilde paths are expanded; relative paths are taken relative to `/host`.
#[must_use]
pub fn resolve_config_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    let path = PathBuf::from(&expanded);
    if path.is_absolute() {
        path
    } else {
        PathBuf::from(HOST_ROOT).join(path)
    }
}
