use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

// The API returns `"track": null` for entries that were removed or are
// local files; those entries carry no usable metadata and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<RawTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: AlbumRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
}

/// Normalized track record: name, primary artist and album, projected out
/// of a raw playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub album: String,
}

impl Track {
    /// Projects a raw playlist entry into a [`Track`], taking the first
    /// artist as the primary one. Returns `None` for entries without a
    /// track object.
    pub fn from_item(item: PlaylistTrackItem) -> Option<Track> {
        let raw = item.track?;
        Some(Track {
            name: raw.name,
            artist: raw
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            album: raw.album.name,
        })
    }
}
