//! # API Module
//!
//! HTTP endpoints of the local extremes service. The service answers the
//! extreme-tracks lookup that the track selector performs before asking
//! Spotify for recommendations, so the selector never needs direct access to
//! the store.
//!
//! ## Endpoints
//!
//! - [`extreme_tracks`] - `GET /api/getExtremeTracks?feature=<f>&limit=<n>`.
//!   Returns a JSON object keyed by feature name holding the `highest` and
//!   `lowest` track, or an empty object for unknown features. Requires an
//!   `Authorization: Bearer …` header.
//! - [`health`] - `GET /health`. Status, crate version and number of stored
//!   features.
//!
//! ## State
//!
//! Both handlers receive the store through an axum [`Extension`] holding a
//! [`SharedStore`]. Handlers only take the read lock.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use featlist::{api::SharedStore, server};
//!
//! let app = server::router(store);
//! ```
//!
//! [`Extension`]: axum::Extension

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::management::ExtremesStore;

mod extremes;
mod health;

pub use extremes::{ExtremeTracksQuery, extreme_tracks};
pub use health::health;

pub type SharedStore = Arc<RwLock<ExtremesStore>>;
