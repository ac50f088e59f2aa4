use playlist_validator::{
    error::ValidationError,
    types::{PlaylistSummary, SpotifyPlaylist, ValidationRequest, ValidationResult},
};
use serde_json::{Value, json};

// Helper function to decode an upstream playlist body
fn playlist(body: Value) -> SpotifyPlaylist {
    serde_json::from_value(body).unwrap()
}

fn upstream_body() -> Value {
    json!({
        "id": "37i9dQZF1DXcBWIGoYBM5M",
        "name": "Today's Top Hits",
        "description": "The hottest 50.",
        "tracks": { "total": 50, "items": [] },
        "owner": { "id": "spotify", "display_name": "Spotify" },
        "images": [
            { "url": "http://img/large", "height": 640, "width": 640 },
            { "url": "http://img/small", "height": 60, "width": 60 }
        ],
        "external_urls": { "spotify": "http://link" },
        "public": true
    })
}

#[test]
fn test_summary_from_playlist() {
    let summary =
        PlaylistSummary::from_playlist(playlist(upstream_body()), "37i9dQZF1DXcBWIGoYBM5M");

    assert_eq!(summary.name, "Today's Top Hits");
    assert_eq!(summary.description, "The hottest 50.");
    assert_eq!(summary.tracks, 50);
    assert_eq!(summary.owner.as_deref(), Some("Spotify"));
    assert_eq!(summary.image.as_deref(), Some("http://img/large"));
    assert_eq!(summary.external_url.as_deref(), Some("http://link"));
    assert_eq!(summary.playlist_id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_summary_image_is_none_without_images() {
    let mut body = upstream_body();
    body["images"] = json!([]);
    let summary = PlaylistSummary::from_playlist(playlist(body), "id");
    assert_eq!(summary.image, None);

    let mut body = upstream_body();
    body["images"] = Value::Null;
    let summary = PlaylistSummary::from_playlist(playlist(body), "id");
    assert_eq!(summary.image, None);
}

#[test]
fn test_summary_image_is_none_for_empty_url() {
    let mut body = upstream_body();
    body["images"] = json!([{ "url": "" }, { "url": "http://img/small" }]);
    let summary = PlaylistSummary::from_playlist(playlist(body), "id");
    assert_eq!(summary.image, None);
}

#[test]
fn test_summary_description_defaults_to_empty() {
    let mut body = upstream_body();
    body.as_object_mut().unwrap().remove("description");
    assert_eq!(PlaylistSummary::from_playlist(playlist(body), "id").description, "");

    let mut body = upstream_body();
    body["description"] = Value::Null;
    assert_eq!(PlaylistSummary::from_playlist(playlist(body), "id").description, "");

    let mut body = upstream_body();
    body["description"] = json!("");
    assert_eq!(PlaylistSummary::from_playlist(playlist(body), "id").description, "");
}

#[test]
fn test_upstream_body_without_tracks_is_rejected() {
    let mut body = upstream_body();
    body.as_object_mut().unwrap().remove("tracks");
    assert!(serde_json::from_value::<SpotifyPlaylist>(body).is_err());
}

#[test]
fn test_valid_result_shape() {
    let summary = PlaylistSummary::from_playlist(playlist(upstream_body()), "abc");
    let value = serde_json::to_value(ValidationResult::valid(summary)).unwrap();

    assert_eq!(
        value,
        json!({
            "valid": true,
            "name": "Today's Top Hits",
            "description": "The hottest 50.",
            "tracks": 50,
            "owner": "Spotify",
            "image": "http://img/large",
            "external_url": "http://link",
            "playlistId": "abc"
        })
    );
}

#[test]
fn test_valid_result_serializes_missing_image_as_null() {
    let mut body = upstream_body();
    body["images"] = json!([]);
    let summary = PlaylistSummary::from_playlist(playlist(body), "abc");
    let value = serde_json::to_value(ValidationResult::valid(summary)).unwrap();

    assert!(value.as_object().unwrap().contains_key("image"));
    assert_eq!(value["image"], Value::Null);
}

#[test]
fn test_invalid_result_shape() {
    let result = ValidationResult::invalid("Unable to access playlist");
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(
        value,
        json!({ "valid": false, "error": "Unable to access playlist" })
    );
    assert!(!ValidationResult::invalid("x").is_valid());
}

#[test]
fn test_validation_error_messages_and_status() {
    let cases = [
        (ValidationError::InvalidUrl, 400, "Invalid Spotify playlist URL format"),
        (ValidationError::NotFound, 200, "Playlist not found or is private"),
        (
            ValidationError::Inaccessible("403 Forbidden".to_string()),
            200,
            "Unable to access playlist",
        ),
        (
            ValidationError::Internal("connection reset".into()),
            500,
            "Server error during validation",
        ),
    ];

    for (err, status, message) in cases {
        assert_eq!(err.status().as_u16(), status);
        assert_eq!(err.to_string(), message);
        assert_eq!(err.to_result(), ValidationResult::invalid(message));
    }
}

#[test]
fn test_request_uses_camel_case() {
    let request: ValidationRequest =
        serde_json::from_value(json!({ "playlistUrl": "https://x/playlist/abc" })).unwrap();
    assert_eq!(request.playlist_url, "https://x/playlist/abc");

    assert!(serde_json::from_value::<ValidationRequest>(json!({ "playlist_url": "x" })).is_err());
}
