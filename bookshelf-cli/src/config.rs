//! Environment file loading
//!
//! Priority order (highest to lowest):
//! 1. Environment variables already set
//! 2. Current directory .env
//! 3. ~/.bookshelf/.env
//!
//! dotenvy never overwrites variables that are already set, so loading the
//! current directory first gives it precedence over the home directory file.

use std::path::PathBuf;

/// Get the bookshelf config directory path (~/.bookshelf)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bookshelf"))
}

/// Load .env files, returning the paths that were applied.
///
/// Runs before tracing is initialized (flags may read these variables), so the
/// caller logs the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_bookshelf() {
        if let Some(path) = config_dir() {
            assert!(path.ends_with(".bookshelf"));
        }
    }

    #[test]
    fn load_dotenv_doesnt_panic() {
        // Should never panic, even if no .env exists
        let _ = load_dotenv();
    }
}
