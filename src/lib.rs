//! Movie Collection Manager CLI Library
//!
//! This library provides functionality for managing a personal movie
//! collection persisted in a local JSON file. It includes modules for the
//! interactive menu, collection storage with backup rotation, query and
//! statistics operations, configuration management, and various utilities
//! for validating user input.
//!
//! # Modules
//!
//! - `cli` - Interactive menu and per-action flow implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Collection persistence and record management
//! - `query` - Filtering, sorting, and statistics over record snapshots
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and input validators
//!
//! # Example
//!
//! ```
//! use cinelog::{cli, config, management::CollectionManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     if let Err(e) = config::load_env().await {
//!         eprintln!("Configuration error: {}", e);
//!     }
//!     let path = config::collection_file();
//!     let mut collection = CollectionManager::new(path).load().await;
//!     cli::run(&mut collection).await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod query;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Loading collection...");
/// info!("Found {} matching movies", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Movie added to collection");
/// success!("Deleted '{}'", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Cannot determine a data directory on this platform");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
/// Used for recoverable issues or important information that users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Collection file not found, starting empty");
/// warning!("Skipped {} invalid entries while loading", skipped);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
