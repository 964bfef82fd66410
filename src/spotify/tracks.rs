use reqwest::Client;

use crate::{
    config,
    types::{PlaylistTracksResponse, Track},
};

/// Retrieves the first page of tracks on a playlist and projects them into
/// normalized [`Track`] records.
///
/// Fetches up to 100 playlist entries and maps each one to its track name,
/// primary artist (the first entry of the raw artist list) and album name,
/// preserving the API's return order. Entries whose track object is `null`
/// are skipped. Only the first page is requested, so longer playlists are
/// truncated silently; this is an accepted limitation of the tool.
///
/// # Arguments
///
/// * `owner_id` - Spotify ID of the account that owns the playlist. For
///   the year playlist this is the `spotify` platform account, not the
///   username the tool was queried with.
/// * `playlist_id` - Spotify ID of the playlist to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Normalized tracks in playlist order, possibly empty
/// - `Err(reqwest::Error)` - Network error, HTTP error status, or a
///   malformed response
///
/// # API Endpoint
///
/// Uses Spotify's `GET /users/{user_id}/playlists/{playlist_id}/tracks`
/// endpoint with `limit=100`.
///
/// # Example
///
/// ```
/// let tracks = get_playlist_tracks("spotify", &playlist.id, &token.access_token).await?;
/// for track in &tracks {
///     println!("{}", utils::format_track(track));
/// }
/// ```
pub async fn get_playlist_tracks(
    owner_id: &str,
    playlist_id: &str,
    token: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{owner}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        owner = owner_id,
        id = playlist_id,
        limit = 100
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<PlaylistTracksResponse>().await?;

    Ok(json.items.into_iter().filter_map(Track::from_item).collect())
}
