use topscli::types::{AlbumRef, PlaylistTrackItem, PlaylistTracksResponse, RawTrack, Track, TrackArtist};

// Helper function to create a raw playlist entry
fn create_test_item(name: &str, artists: Vec<&str>, album: &str) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(RawTrack {
            name: name.to_string(),
            artists: artists
                .into_iter()
                .map(|a| TrackArtist {
                    name: a.to_string(),
                })
                .collect(),
            album: AlbumRef {
                name: album.to_string(),
            },
        }),
    }
}

#[test]
fn test_track_projection() {
    let item = create_test_item("Song", vec!["Artist"], "Album");
    let track = Track::from_item(item).unwrap();

    assert_eq!(track.name, "Song");
    assert_eq!(track.artist, "Artist");
    assert_eq!(track.album, "Album");
}

#[test]
fn test_track_projection_uses_first_artist_only() {
    let item = create_test_item("Song", vec!["Primary", "Featured", "Another"], "Album");
    let track = Track::from_item(item).unwrap();

    assert_eq!(track.artist, "Primary");
}

#[test]
fn test_track_projection_skips_null_track() {
    let item = PlaylistTrackItem { track: None };
    assert!(Track::from_item(item).is_none());
}

#[test]
fn test_tracks_response_deserialization() {
    let json = r#"{
        "items": [
            {
                "track": {
                    "name": "Song A",
                    "artists": [{"name": "Artist A"}, {"name": "Artist B"}],
                    "album": {"name": "Album A"}
                }
            },
            {
                "track": null
            }
        ]
    }"#;

    let response: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.items.len(), 2);

    let tracks: Vec<Track> = response
        .items
        .into_iter()
        .filter_map(Track::from_item)
        .collect();

    // Null-track entry is dropped, first artist wins
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist, "Artist A");
    assert_eq!(tracks[0].album, "Album A");
}

#[test]
fn test_playlists_response_deserialization_ignores_extra_fields() {
    let json = r#"{
        "items": [
            {
                "id": "37i9dQ",
                "name": "Your Top Songs 2017",
                "public": true,
                "snapshot_id": "abc"
            }
        ]
    }"#;

    let response: topscli::types::GetUserPlaylistsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id, "37i9dQ");
    assert_eq!(response.items[0].name, "Your Top Songs 2017");
}
