// src/constants.rs
//
// Application-wide constants.

/// Base URL used when neither the command line nor the config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the base URL by the CLI.
pub const BASE_URL_ENV: &str = "NOTES_API_URL";

/// Directory under the platform config dir that holds `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "notes-client";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum characters of note content shown per row in list output.
///
/// Used in: `lib.rs` (list and search rendering)
pub const SUMMARY_WIDTH: usize = 60;
