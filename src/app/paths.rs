// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_RESIZE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedResize";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_RESIZE_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .is_err()
    {
        tracing::warn!("config directory override already initialized");
    }
}

/// Returns the application config directory path with an optional override.
///
/// Linux: `~/.config/IcedResize/`, macOS: `~/Library/Application Support/IcedResize/`,
/// Windows: `C:\Users\<User>\AppData\Roaming\IcedResize\`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Applies the resolution order to already-gathered candidates.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli {
        return Some(path);
    }
    if let Some(value) = env.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    platform.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let resolved = resolve_dir(
            Some(PathBuf::from("/override")),
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/override")));
    }

    #[test]
    fn cli_beats_environment() {
        let resolved = resolve_dir(
            None,
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn blank_environment_is_ignored() {
        let resolved = resolve_dir(None, None, Some("  ".into()), Some(PathBuf::from("/platform")));
        assert_eq!(resolved, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn environment_is_used_verbatim() {
        let resolved = resolve_dir(None, None, Some("/env".into()), Some(PathBuf::from("/platform")));
        assert_eq!(resolved, Some(PathBuf::from("/env")));
    }

    #[test]
    fn nothing_available_yields_none() {
        assert_eq!(resolve_dir(None, None, None, None), None);
    }
}
