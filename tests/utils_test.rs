use featlist::types::{PlaylistTracksResponse, Track};
use featlist::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str) -> Track {
    Track {
        name: name.to_string(),
        ..Track::from_id(id)
    }
}

#[test]
fn test_to_track_uri() {
    assert_eq!(to_track_uri("4uLU6hMCjMI75M1A2tKUQC"), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(
        to_track_uris(&["A".to_string(), "B".to_string()]),
        vec!["spotify:track:A", "spotify:track:B"]
    );
    assert!(to_track_uris(&[]).is_empty());
}

#[test]
fn test_generate_temporary_playlist_id() {
    let id = generate_temporary_playlist_id();

    // "temp_" followed by 9 characters
    assert_eq!(id.len(), 14);
    assert!(id.starts_with("temp_"));

    let suffix = &id["temp_".len()..];
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );

    // Two generated ids should be different
    assert_ne!(id, generate_temporary_playlist_id());
}

#[test]
fn test_remove_duplicate_tracks_keeps_first_occurrence() {
    let mut tracks = vec![
        create_test_track("A", "first A"),
        create_test_track("B", "B"),
        create_test_track("A", "second A"),
        create_test_track("C", "C"),
        create_test_track("B", "second B"),
    ];

    remove_duplicate_tracks(&mut tracks);

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert_eq!(tracks[0].name, "first A");
}

#[test]
fn test_remove_duplicate_tracks_empty() {
    let mut tracks: Vec<Track> = Vec::new();
    remove_duplicate_tracks(&mut tracks);
    assert!(tracks.is_empty());
}

#[test]
fn test_track_deserializes_spotify_shape() {
    let json = r#"{
        "id": "A",
        "name": "Song",
        "uri": "spotify:track:A",
        "artists": [{"id": "x", "name": "One"}, {"name": "Two"}],
        "album": {"id": "al", "name": "Record"},
        "popularity": 50
    }"#;

    let track: Track = serde_json::from_str(json).unwrap();

    assert_eq!(track.artist_names(), "One, Two");
    assert_eq!(track.album.unwrap().name, "Record");
}

#[test]
fn test_playlist_page_tolerates_missing_tracks() {
    let json = r#"{
        "items": [{"track": null}, {"track": {"id": null, "uri": "spotify:local:a:b:c:1"}}],
        "next": null
    }"#;

    let page: PlaylistTracksResponse = serde_json::from_str(json).unwrap();

    assert!(page.items[0].track.is_none());
    assert_eq!(
        page.items[1].track.as_ref().and_then(|t| t.uri.as_deref()),
        Some("spotify:local:a:b:c:1")
    );
    assert!(page.next.is_none());
}
