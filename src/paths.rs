//! XDG data locations.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "trivia";

/// Get the data directory.
///
/// `$XDG_DATA_HOME/trivia`, falling back to `~/.local/share/trivia`, and to
/// `./trivia` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/trivia.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("trivia.db")
}
