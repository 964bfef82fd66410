use reqwest::Client;

use crate::{
    config,
    types::{GetUserPlaylistsResponse, Playlist},
};

/// Retrieves the first page of a user's playlists from the Spotify Web API.
///
/// Fetches up to 50 playlists visible on the given user's profile,
/// preserving the API's return order. Only the first page is requested;
/// a user whose target playlist lies beyond it will appear not to follow
/// that playlist. This is an accepted limitation of the tool.
///
/// # Arguments
///
/// * `username` - Spotify username whose playlists to list
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Playlist>)` - The user's playlists in API return order,
///   possibly empty
/// - `Err(reqwest::Error)` - Network error, HTTP error status, or a
///   malformed response
///
/// # API Endpoint
///
/// Uses Spotify's `GET /users/{user_id}/playlists` endpoint with
/// `limit=50`. An unknown username surfaces as an HTTP error status via
/// `error_for_status`.
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists("some-user", &token.access_token).await?;
/// println!("Found {} playlists", playlists.len());
/// ```
pub async fn get_user_playlists(
    username: &str,
    token: &str,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user}/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        user = username,
        limit = 50
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<GetUserPlaylistsResponse>().await?;

    Ok(json.items)
}
