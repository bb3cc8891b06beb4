use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri, header},
};
use featlist::errors::ApiError;
use featlist::management::{ExtremesStore, StaticToken};
use featlist::playlist::select_tracks;
use featlist::server;
use featlist::spotify::SpotifyClient;
use featlist::types::{CreatePlaylistRequest, FeatureExtremes, SelectionRequest, Track};
use serde_json::{Value, json};
use tokio::sync::RwLock;

fn temp_store_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "featlist-server-test-{}-{}.json",
        std::process::id(),
        name
    ))
}

async fn energy_store(name: &str) -> ExtremesStore {
    let mut store = ExtremesStore::open(temp_store_path(name)).await.unwrap();
    store.set(
        "energy",
        FeatureExtremes {
            highest: Track::from_id("A"),
            lowest: Track::from_id("B"),
        },
    );
    store
}

// Serves the extremes router on an ephemeral port and returns its base URL
async fn spawn_service(store: ExtremesStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(Arc::new(RwLock::new(store)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str, token: &str) -> SpotifyClient {
    // both endpoints point at the local service; it does not know Spotify routes
    SpotifyClient::new(base_url, base_url, Arc::new(StaticToken::new(token)))
}

#[tokio::test]
async fn test_client_reads_stored_extremes() {
    let base_url = spawn_service(energy_store("reads").await).await;
    let client = client(&base_url, "token");

    let extremes = client.get_feature_extremes("energy", 5).await.unwrap();

    let extremes = extremes.expect("energy should be stored");
    assert_eq!(extremes.highest.id, "A");
    assert_eq!(extremes.lowest.id, "B");
}

#[tokio::test]
async fn test_unknown_feature_is_absent() {
    let base_url = spawn_service(energy_store("unknown").await).await;
    let client = client(&base_url, "token");

    let extremes = client.get_feature_extremes("tempo", 5).await.unwrap();

    assert!(extremes.is_none());
}

#[tokio::test]
async fn test_request_without_bearer_is_unauthorized() {
    let base_url = spawn_service(energy_store("unauthorized").await).await;

    let res = reqwest::Client::new()
        .get(format!("{}/api/getExtremeTracks?feature=energy&limit=5", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_credential_fails_before_request() {
    // nothing listens on port 9; a request would fail with a transport error instead
    let client = client("http://127.0.0.1:9", "");

    let err = client.get_feature_extremes("energy", 5).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingCredential));
}

#[tokio::test]
async fn test_non_success_status_carries_code_and_reason() {
    let base_url = spawn_service(energy_store("status").await).await;
    let client = client(&base_url, "token");

    let err = client.get_track("A").await.unwrap_err();

    match err {
        ApiError::UpstreamRequestFailed {
            status,
            status_text,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_selection_filled_by_seeds_needs_no_recommendations() {
    let base_url = spawn_service(energy_store("seeds").await).await;
    let client = client(&base_url, "token");

    let request = SelectionRequest {
        feature: "energy".to_string(),
        limit: 2,
        selected_track_id: None,
    };
    let ids = select_tracks(&client, &request).await.unwrap();

    assert_eq!(ids, vec!["A", "B"]);
}

#[tokio::test]
async fn test_selection_propagates_recommendation_failure() {
    let base_url = spawn_service(energy_store("recommend").await).await;
    let client = client(&base_url, "token");

    let request = SelectionRequest {
        feature: "energy".to_string(),
        limit: 3,
        selected_track_id: None,
    };
    let err = select_tracks(&client, &request).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_health_reports_stored_features() {
    let base_url = spawn_service(energy_store("health").await).await;

    let body: Value = reqwest::get(format!("{}/health", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["features"], 1);
}

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    authorization: Option<String>,
    content_type: Option<String>,
    body: Value,
}

type Recordings = Arc<Mutex<Vec<Recorded>>>;

// Answers every request with one document that decodes as a track, a
// playlist, a recommendations page, a playlist page and an append response.
async fn record(
    State(recordings): State<Recordings>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let query = reqwest::Url::parse(&format!("http://recorder{}", uri))
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect();

    recordings.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    Json(json!({
        "id": "pl1",
        "name": "Energy",
        "tracks": [{ "id": "R1" }],
        "snapshot_id": "snap",
        "items": [],
    }))
}

// Serves a recorder for every path and returns its base URL
async fn spawn_recorder() -> (String, Recordings) {
    let recordings = Recordings::default();
    let app = Router::new()
        .fallback(record)
        .with_state(recordings.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/v1", addr), recordings)
}

fn single(recordings: &Recordings) -> Recorded {
    let recorded = recordings.lock().unwrap();
    assert_eq!(recorded.len(), 1, "expected exactly one request: {recorded:?}");
    recorded[0].clone()
}

#[tokio::test]
async fn test_recommendations_send_bearer_and_seed_query() {
    let (base_url, recordings) = spawn_recorder().await;
    let client = client(&base_url, "secret");

    let tracks = client
        .get_recommendations(&["A".to_string(), "B".to_string()], 3)
        .await
        .unwrap();

    assert_eq!(tracks, vec![Track::from_id("R1")]);
    let req = single(&recordings);
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/v1/recommendations");
    assert_eq!(
        req.query,
        vec![
            ("limit".to_string(), "3".to_string()),
            ("seed_tracks".to_string(), "A,B".to_string()),
        ]
    );
    assert_eq!(req.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(req.body, Value::Null);
}

#[tokio::test]
async fn test_append_posts_uris_body() {
    let (base_url, recordings) = spawn_recorder().await;
    let client = client(&base_url, "secret");

    let snapshot = client
        .append_tracks("pl1", &["spotify:track:A".to_string()])
        .await
        .unwrap();

    assert_eq!(snapshot, "snap");
    let req = single(&recordings);
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/v1/playlists/pl1/tracks");
    assert_eq!(req.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(req.body, json!({ "uris": ["spotify:track:A"] }));
}

#[tokio::test]
async fn test_create_posts_private_playlist_for_user() {
    let (base_url, recordings) = spawn_recorder().await;
    let client = client(&base_url, "secret");

    let request = CreatePlaylistRequest {
        name: "Energy".to_string(),
        description: "Playlist created based on audio features".to_string(),
        public: false,
        collaborative: false,
    };
    let playlist = client.create_user_playlist("listener", &request).await.unwrap();

    assert_eq!(playlist.id, "pl1");
    let req = single(&recordings);
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/v1/users/listener/playlists");
    assert_eq!(req.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        req.body,
        json!({
            "name": "Energy",
            "description": "Playlist created based on audio features",
            "public": false,
            "collaborative": false,
        })
    );
}

#[tokio::test]
async fn test_ids_cannot_escape_their_path_segment() {
    let (base_url, recordings) = spawn_recorder().await;
    let client = client(&base_url, "secret");

    client.get_track("A/../../me?x=1").await.unwrap();
    client
        .create_user_playlist(
            "a user#1",
            &CreatePlaylistRequest {
                name: "Energy".to_string(),
                description: String::new(),
                public: false,
                collaborative: false,
            },
        )
        .await
        .unwrap();
    client.get_playlist_tracks("p?offset=9", 100).await.unwrap();

    let recorded = recordings.lock().unwrap().clone();
    assert_eq!(recorded[0].path, "/v1/tracks/A%2F..%2F..%2Fme%3Fx=1");
    assert!(recorded[0].query.is_empty());
    assert_eq!(recorded[1].path, "/v1/users/a%20user%231/playlists");
    assert_eq!(recorded[2].path, "/v1/playlists/p%3Foffset=9/tracks");
    assert_eq!(
        recorded[2].query,
        vec![
            ("offset".to_string(), "100".to_string()),
            ("limit".to_string(), "100".to_string()),
        ]
    );
}
