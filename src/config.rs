//! Configuration management for the movie collection manager.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! resolve the storage location of the collection file.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command line argument (highest priority, resolved in `main`)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application default under the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `cinelog/.env`. A missing `.env` file is not an
/// error; every configuration value has a built-in default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/cinelog/.env`
/// - macOS: `~/Library/Application Support/cinelog/.env`
/// - Windows: `%LOCALAPPDATA%/cinelog/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if the
/// data directory cannot be created.
///
/// # Example
///
/// ```
/// use cinelog::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cinelog/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).ok();
    Ok(())
}

/// Returns the path of the collection storage file.
///
/// Retrieves the `CINELOG_COLLECTION_FILE` environment variable if set,
/// falling back to `collection.json` inside the application's directory
/// under the platform-specific local data directory.
///
/// # Example
///
/// ```
/// let path = collection_file(); // e.g., "~/.local/share/cinelog/collection.json"
/// ```
pub fn collection_file() -> PathBuf {
    match env::var("CINELOG_COLLECTION_FILE") {
        Ok(file) => PathBuf::from(file),
        Err(_) => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("cinelog/collection.json");
            path
        }
    }
}
