//! Saved default flags.
//!
//! Defaults live in plain-text flag files, one flag per line. The global file
//! sits in the platform config directory and a `.dadjokerc` in the working
//! directory overrides it. Flags given on the command line win over both.

use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "dadjoke-tui";
const LOCAL_FILE: &str = ".dadjokerc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub search: Option<String>,
    pub limit: Option<NonZeroU32>,
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub no_color: bool,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` take precedence.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            search: other.search.clone().or_else(|| self.search.clone()),
            limit: other.limit.or(self.limit),
            api_url: other.api_url.clone().or_else(|| self.api_url.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            no_color: self.no_color || other.no_color,
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

/// Read a flag file. A missing file is an empty set of flags.
///
/// Lines that were skipped come back as warnings prefixed with the file
/// path. Logging may not be set up yet when config is read, so reporting
/// them is left to the caller.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<(ConfigFlags, Vec<String>)> {
    if !path.exists() {
        return Ok((ConfigFlags::default(), Vec::new()));
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let (flags, warnings) = parse_config_lines(&content);
    let warnings = warnings
        .into_iter()
        .map(|warning| format!("{}: {warning}", path.display()))
        .collect();
    Ok((flags, warnings))
}

/// Write `flags` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# dadjoke-tui defaults (saved with --save)".to_string());
    if let Some(search) = &flags.search {
        lines.push(format!("--search {search}"));
    }
    if let Some(limit) = flags.limit {
        lines.push(format!("--limit {limit}"));
    }
    if let Some(url) = &flags.api_url {
        lines.push(format!("--api-url {url}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if flags.no_color {
        lines.push("--no-color".to_string());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the flag file at `path` if there is one.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Parse flag-file contents.
///
/// Each non-comment line holds one flag; everything after the flag name is
/// its value, so search terms may contain spaces. Unknown flags and bad
/// values are skipped, and each skipped line yields one warning.
pub fn parse_config_lines(content: &str) -> (ConfigFlags, Vec<String>) {
    let mut flags = ConfigFlags::default();
    let mut warnings = Vec::new();
    for line in content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        let (name, value) = match line.split_once('=') {
            Some((name, value)) if name.starts_with("--") && !name.contains(' ') => {
                (name, value.trim())
            }
            _ => line
                .split_once(char::is_whitespace)
                .map_or((line, ""), |(name, value)| (name, value.trim())),
        };
        if let Err(warning) = apply_flag(&mut flags, name, value) {
            warnings.push(warning);
        }
    }
    (flags, warnings)
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) -> Result<(), String> {
    match name {
        "--search" | "-s" => flags.search = Some(value.to_string()),
        "--limit" | "-l" => match value.parse::<NonZeroU32>() {
            Ok(limit) => flags.limit = Some(limit),
            Err(err) => return Err(format!("ignoring invalid --limit {value:?}: {err}")),
        },
        "--api-url" if !value.is_empty() => flags.api_url = Some(value.to_string()),
        "--log-file" if !value.is_empty() => flags.log_file = Some(PathBuf::from(value)),
        "--no-color" => flags.no_color = true,
        _ => return Err(format!("ignoring unknown config flag {name}")),
    }
    Ok(())
}
