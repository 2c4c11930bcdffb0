//! Site configuration module.
//!
//! Loads and validates `site.toml`. The configuration snapshot is immutable
//! for the duration of a build: it is loaded once, before any discovery or
//! write operation, and everything else reads from it.
//!
//! ## Config File Location
//!
//! Place `site.toml` in the source root:
//!
//! ```text
//! site/
//! ├── site.toml                 # Site configuration (optional)
//! ├── index.html                # Page
//! ├── css/main.css              # Page (css is processable by default)
//! ├── img/logo.png              # Asset — copied verbatim
//! ├── _posts/                   # Posts (markdown extensions only)
//! │   └── 2020-01-01-hi.md
//! ├── _layouts/                 # Layouts (every file, extension-free)
//! │   └── default.html
//! ├── _includes/                # Special — never scanned generically
//! ├── _plugins/                 # Special — never scanned generically
//! └── _site/                    # Destination — never scanned
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "."                  # Source root, relative to this file
//! destination = "_site"         # Output directory
//! posts = "_posts"              # Posts directory
//! layouts = "_layouts"          # Layouts directory
//! includes = "_includes"        # Includes directory
//! plugins = "_plugins"          # Plugins directory
//!
//! markdown_ext = ["md", "markdown", "mkd", "mkdn"]
//! processable_ext = ["htm", "html", "xhtml", "xml", "css", "js", "txt"]
//!
//! include = []                  # Paths force-included into discovery
//! exclude = []                  # Glob patterns force-excluded from discovery
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only switch off generic text processing
//! processable_ext = ["html"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the configuration file, looked up in the source root.
/// Skipped by asset discovery so it never reaches the destination.
pub const CONFIG_FILE_NAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Immutable configuration snapshot loaded from `site.toml`.
///
/// All fields have defaults, so a site without a config file builds with the
/// conventional `_posts`/`_layouts`/`_site` layout. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source root, relative to the directory holding `site.toml`.
    pub source: String,
    /// Output directory. Created on writer construction if missing.
    pub destination: String,
    /// Posts directory (special — excluded from generic scanning).
    pub posts: String,
    /// Layouts directory (special).
    pub layouts: String,
    /// Includes directory (special).
    pub includes: String,
    /// Plugins directory (special).
    pub plugins: String,
    /// Extensions (no leading dot) naming post content.
    pub markdown_ext: Vec<String>,
    /// Extensions (no leading dot) naming generically processable content.
    pub processable_ext: Vec<String>,
    /// Paths (files or directories) force-included into discovery even when
    /// the special-directory or pattern rules would skip them.
    pub include: Vec<String>,
    /// Glob patterns force-excluded from discovery regardless of extension.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: ".".to_string(),
            destination: "_site".to_string(),
            posts: "_posts".to_string(),
            layouts: "_layouts".to_string(),
            includes: "_includes".to_string(),
            plugins: "_plugins".to_string(),
            markdown_ext: strings(&["md", "markdown", "mkd", "mkdn"]),
            processable_ext: strings(&["htm", "html", "xhtml", "xml", "css", "js", "txt"]),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Union of `processable_ext` and `markdown_ext`, first occurrence wins.
    ///
    /// Pages and assets are classified against this combined set: anything a
    /// renderer could consume counts as processable.
    pub fn processable_union(&self) -> Vec<String> {
        let mut union = self.processable_ext.clone();
        for ext in &self.markdown_ext {
            if !union.contains(ext) {
                union.push(ext.clone());
            }
        }
        union
    }

    /// Reject structurally unusable entries: empty extension names, extensions
    /// carrying a leading dot or separator, empty include/exclude paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for ext in self.markdown_ext.iter().chain(&self.processable_ext) {
            if ext.is_empty() {
                return Err(ConfigError::Validation("empty extension entry".into()));
            }
            if ext.starts_with('.') || ext.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "extension {ext:?} must be named without a leading dot or separator"
                )));
            }
        }
        for (key, list) in [("include", &self.include), ("exclude", &self.exclude)] {
            if list.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::Validation(format!("empty {key} entry")));
            }
        }
        Ok(())
    }
}

/// Load `site.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME), true)
}

/// Load an explicit config file path. The file must exist.
pub fn load_config_path(path: &Path) -> Result<Config, ConfigError> {
    load_config_file(path, false)
}

fn load_config_file(path: &Path, optional: bool) -> Result<Config, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else if optional {
        Config::default()
    } else {
        return Err(ConfigError::Validation(format!(
            "config file not found: {}",
            path.display()
        )));
    };
    config.validate()?;
    Ok(config)
}
