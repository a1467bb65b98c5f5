//! Home directory resolution helpers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the application home directory.
///
/// When `configured` is `Some`, it is expanded (a leading `~` maps to the
/// user's home directory) and used as-is. When `None`, the platform default
/// is used: `%APPDATA%\<subdir>` on Windows, `$HOME/<subdir>` elsewhere.
///
/// The resulting directory is created when `create` is true.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match configured {
        Some(raw) => expand_tilde(&raw)?,
        None => user_base_dir()?.join(default_subdir),
    };

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("Failed to create directory '{}'", resolved.display()))?;
    }

    Ok(resolved)
}

fn user_base_dir() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = "APPDATA";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";

    std::env::var_os(var)
        .map(PathBuf::from)
        .with_context(|| format!("Environment variable {var} is not set"))
}

fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return user_base_dir();
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(user_base_dir()?.join(rest));
    }
    Ok(Path::new(raw).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("sub");
        let resolved =
            resolve_home_dir(Some(p.to_string_lossy().to_string()), ".testbed", true).unwrap();
        assert_eq!(resolved, p);
        assert!(resolved.exists());
    }

    #[test]
    fn tilde_expands_to_home() {
        let dir = tempfile::tempdir().unwrap();
        #[cfg(target_os = "windows")]
        std::env::set_var("APPDATA", dir.path());
        #[cfg(not(target_os = "windows"))]
        std::env::set_var("HOME", dir.path());

        let resolved = resolve_home_dir(Some("~/.expanded".into()), ".testbed", false).unwrap();
        assert_eq!(resolved, dir.path().join(".expanded"));
    }

    #[test]
    fn default_subdir_used_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        #[cfg(target_os = "windows")]
        std::env::set_var("APPDATA", dir.path());
        #[cfg(not(target_os = "windows"))]
        std::env::set_var("HOME", dir.path());

        let resolved = resolve_home_dir(None, ".testbed", false).unwrap();
        assert_eq!(resolved, dir.path().join(".testbed"));
    }
}
