//! Centralized path definitions for luhnkit
//!
//! ## Layout
//!
//! ```text
//! ~/.config/luhnkit/
//! └── config.toml               # Generation and formatting defaults
//!
//! <out-dir>/                    # Written by `luhnkit dedup --out-dir`
//! ├── part_1.txt
//! └── part_2.txt
//! ```

use std::path::{Path, PathBuf};

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/luhnkit";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Prefix of the chunk files written by `dedup`
const PART_PREFIX: &str = "part";

/// Get the global luhnkit directory.
///
/// Returns `~/.config/luhnkit/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/luhnkit/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Path of the `k`-th (1-based) chunk file inside `dir`
#[must_use]
pub fn part_file(dir: &Path, k: usize) -> PathBuf {
    dir.join(format!("{PART_PREFIX}_{k}.txt"))
}
