use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};

use crate::types::Track;

pub const TRACK_URI_PREFIX: &str = "spotify:track:";

pub fn to_track_uri(id: &str) -> String {
    format!("{TRACK_URI_PREFIX}{id}")
}

pub fn to_track_uris(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| to_track_uri(id)).collect()
}

/// Name for a throwaway playlist, e.g. `temp_k3x9a0b2q`.
pub fn generate_temporary_playlist_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("temp_{suffix}")
}

/// Keeps the first occurrence of every track id, preserving order.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
