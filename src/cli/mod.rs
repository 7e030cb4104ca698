//! # CLI Module
//!
//! This module provides the interactive command-line layer for cinelog, a
//! manager for a personal movie collection stored in a local JSON file. It
//! implements the menu loop and all user-facing actions, and coordinates
//! between user input, the collection storage layer, and the query engine.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the collection.
//! It provides a numbered menu with the following actions:
//!
//! - **Collection Maintenance**: Adding, editing, and deleting movies
//! - **Browsing**: Viewing the full collection as a formatted table
//! - **Queries**: Searching by field, year range, or minimum rating
//! - **Ordering**: Sorting the collection by various keys
//! - **Insights**: Aggregate statistics over the whole collection
//!
//! ## Menu Actions
//!
//! - [`run`] - Main menu loop; prints load warnings and dispatches actions
//! - [`add_movie`] - Prompts for a new movie with validated input
//! - [`show_collection`] - Renders movies as a table with 1-based positions
//! - [`show_statistics`] - Displays aggregate statistics and rating distribution
//! - [`search_movies`] - Search submenu over title/genre/director/year/rating
//! - [`edit_movie`] - Field-by-field editing where empty input keeps values
//! - [`sort_collection`] - Sort submenu; the new order is persisted
//! - [`delete_movie`] - Removes a movie by its displayed position
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (Menu & Prompts)
//!     ↓
//! Management Layer (Collection Storage)
//!     ↓
//! Query Layer (Filter / Sort / Statistics)
//!     ↓
//! File Layer (JSON with Backup Rotation)
//! ```
//!
//! Each action delegates to the management and query modules while handling
//! user interaction, input validation, and error presentation.
//!
//! ## Data Flow Patterns
//!
//! ### Mutating Actions
//! 1. **Input Collection**: Prompt with validation and retry loops
//! 2. **Store Update**: Apply the change to the in-memory collection
//! 3. **Persistence**: Save with backup rotation after every mutation
//! 4. **Feedback**: Confirm success or warn without losing state
//!
//! ### Query Actions
//! 1. **Snapshot**: Read the current collection slice
//! 2. **Data Processing**: Filter, sort, or aggregate for display
//! 3. **Output Generation**: Create formatted tables or statistics
//! 4. **Error Handling**: Friendly notices for empty or missing data
//!
//! ## Error Handling Philosophy
//!
//! The CLI module implements user-friendly error handling:
//!
//! - **Graceful Degradation**: Save failures never lose in-memory changes
//! - **Helpful Messages**: Invalid input explains the expected domain
//! - **Retry Loops**: Validated prompts re-ask instead of aborting
//! - **Cancellation**: 'back', position 0, and EOF cancel cleanly
//!
//! ## Usage Patterns
//!
//! ```bash
//! cinelog                          # use the default collection location
//! cinelog --file my-movies.json   # use an explicit collection file
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::management`] - Collection persistence and record management
//! - [`crate::query`] - Filtering, sorting, and statistics
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Input validation and formatting helpers

mod add;
mod delete;
mod edit;
mod menu;
mod prompt;
mod search;
mod sort;
mod stats;
mod view;

pub use add::add_movie;
pub use delete::delete_movie;
pub use edit::edit_movie;
pub use menu::run;
pub use search::search_movies;
pub use sort::sort_collection;
pub use stats::show_statistics;
pub use view::show_collection;
