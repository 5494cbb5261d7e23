//! Sandbox path helpers.

use std::path::PathBuf;

/// Directory holding the plugin's trace file.
///
/// `/host` maps to the cwd of the last focused terminal (usually the user's
/// home), so this typically resolves to `~/.local/share/zellij/bookfinder`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookfinder")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use bookfinder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a.toml"), "/host/a.toml");
        // other users' homes are not reachable from the sandbox
        assert_eq!(expand_tilde("~alice/a.toml"), "~alice/a.toml");
        assert_eq!(expand_tilde("relative.toml"), "relative.toml");
    }

    #[test]
    fn test_data_dir() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/bookfinder"));
    }
}
