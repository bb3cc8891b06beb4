//! # CLI Module
//!
//! This module provides the command-line interface layer for featlist. It
//! implements all user-facing commands and coordinates between the Spotify
//! client, the track selector, the playlist materializer and the extremes store.
//!
//! ## Command Categories
//!
//! ### Selection and Playlists
//!
//! - [`select`] - Prints the track ids selected for a feature
//! - [`playlist`] - Selects tracks for a feature and saves them as a playlist
//! - [`copy`] - Copies an existing playlist into a new private one
//!
//! ### Listening Data
//!
//! - [`top`] - Shows the user's top tracks as a table
//!
//! ### Extremes Store
//!
//! - [`set_extremes`] - Resolves two tracks and stores them as a feature's extremes
//! - [`remove_extremes`] - Drops a feature from the store
//! - [`list_extremes`] - Lists stored features
//! - [`serve`] - Runs the local extremes service
//!
//! ## Error Handling
//!
//! Commands report through the crate's output macros. Failures of the main
//! operation end the process via [`crate::error!`]; side issues are reported
//! with [`crate::warning!`] and the command carries on.
//!
//! ## Usage Patterns
//!
//! ```bash
//! featlist extremes set --feature energy --highest 4uLU6hMCjMI75M1A2tKUQC --lowest 0VjIjW4GlUZAMYd2vXMi3b
//! featlist serve &
//! featlist select --feature energy --limit 10
//! featlist playlist --feature energy --name "Energy range" --limit 20
//! featlist playlist --feature energy --temporary --track 7ouMYWpwJ422jRcDASZB7P
//! featlist copy --playlist 37i9dQZF1DXcBWIGoYBM5M --name "My copy"
//! featlist copy --playlist 37i9dQZF1DXcBWIGoYBM5M
//! featlist extremes list
//! featlist top --limit 5
//! ```

mod extremes;
mod playlist;
mod select;
mod serve;
mod top;

pub use extremes::list_extremes;
pub use extremes::remove_extremes;
pub use extremes::set_extremes;
pub use playlist::copy;
pub use playlist::playlist;
pub use select::select;
pub use serve::serve;
pub use top::top;
