//! Path resolution anchored at the source root.
//!
//! All relative paths in the configuration (posts, layouts, includes, plugins,
//! destination) are resolved against an explicit root directory — never against
//! the process working directory. Resolution failures are an expected condition
//! (a site with no `_layouts` directory is valid), so [`resolve`] returns
//! `Option<PathBuf>` rather than an error: `None` means "directory absent,
//! feature not used".
//!
//! Relative paths handed to the rest of the crate are always `/`-separated,
//! regardless of platform, so records compare and serialize identically
//! everywhere.

use std::path::{Component, Path, PathBuf};

/// Canonicalize `path`, joining it onto `root` first when it is relative.
///
/// Returns `None` when the path does not exist or cannot be canonicalized.
/// Callers treat `None` as "directory absent, skip this source".
pub fn resolve(root: &Path, path: &Path) -> Option<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined.canonicalize().ok()
}

/// Canonicalize a root directory itself (no anchoring).
pub fn resolve_root(path: &Path) -> Option<PathBuf> {
    path.canonicalize().ok()
}

/// Express `target` relative to `base`, `/`-separated, no trailing separator.
///
/// Returns an empty string when `target` does not lie under `base` — escaping
/// the root collapses to empty rather than producing `..` segments.
pub fn relativize(base: &Path, target: &Path) -> String {
    match target.strip_prefix(base) {
        Ok(rel) => to_slash(rel),
        Err(_) => String::new(),
    }
}

/// Render a relative path with forward separators.
///
/// `.` components are dropped; `..` components never appear in canonicalized
/// input and are dropped as well.
pub fn to_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_existing_relative_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("_posts")).unwrap();

        let resolved = resolve(tmp.path(), Path::new("_posts")).unwrap();
        assert!(resolved.ends_with("_posts"));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn resolve_missing_dir_is_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve(tmp.path(), Path::new("_layouts")), None);
    }

    #[test]
    fn resolve_absolute_path_ignores_root() {
        let tmp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let resolved = resolve(tmp.path(), other.path()).unwrap();
        assert_eq!(resolved, other.path().canonicalize().unwrap());
    }

    #[test]
    fn resolve_root_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve_root(&tmp.path().join("nope")), None);
    }

    #[test]
    fn relativize_nested_file() {
        let base = Path::new("/site");
        let target = Path::new("/site/docs/about.html");
        assert_eq!(relativize(base, target), "docs/about.html");
    }

    #[test]
    fn relativize_same_path_is_empty() {
        let base = Path::new("/site");
        assert_eq!(relativize(base, base), "");
    }

    #[test]
    fn relativize_outside_base_collapses_to_empty() {
        let base = Path::new("/site");
        let target = Path::new("/elsewhere/about.html");
        assert_eq!(relativize(base, target), "");
    }

    #[test]
    fn relativize_strips_trailing_separator() {
        let base = Path::new("/site");
        let target = Path::new("/site/assets/");
        assert_eq!(relativize(base, target), "assets");
    }

    #[test]
    fn to_slash_drops_curdir() {
        assert_eq!(to_slash(Path::new("./a/b")), "a/b");
    }
}
