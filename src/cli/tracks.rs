use crate::{
    config, error, spotify,
    utils::{billboard, find_playlist_by_name, format_track},
};

/// Fetches a user's "Your Top Songs 2017" playlist and prints its tracks.
///
/// Runs the whole workflow: obtains a client-credentials token, lists the
/// user's playlists, searches them for the year playlist by exact name,
/// fetches that playlist's tracks and prints a billboard header followed
/// by one line per track in playlist order.
///
/// # Exit Behavior
///
/// * User has zero playlists - prints a message and exits 1
/// * User does not follow the year playlist - prints a message and exits 1
/// * Authentication or network failure - prints the error and exits 1
///
/// An empty year playlist is not an error: the header is printed with no
/// track lines, and the program exits 0.
pub async fn year_playlist(username: String) {
    let token = match spotify::auth::request_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to authenticate with Spotify: {}", e);
        }
    };

    let playlists = match spotify::playlists::get_user_playlists(&username, &token.access_token)
        .await
    {
        Ok(playlists) => playlists,
        Err(e) => {
            error!("Failed to fetch playlists for user {}: {}", username, e);
        }
    };

    if playlists.is_empty() {
        error!("No playlists found for user {}.", username);
    }

    let year_playlist = match find_playlist_by_name(&playlists, config::YEAR_PLAYLIST_NAME) {
        Some(playlist) => playlist,
        None => {
            error!(
                "User \"{user}\" does not follow their \"{playlist}\" playlist.",
                user = username,
                playlist = config::YEAR_PLAYLIST_NAME
            );
        }
    };

    let tracks = match spotify::tracks::get_playlist_tracks(
        config::YEAR_PLAYLIST_OWNER,
        &year_playlist.id,
        &token.access_token,
    )
    .await
    {
        Ok(tracks) => tracks,
        Err(e) => {
            error!("Failed to fetch tracks: {}", e);
        }
    };

    let header = format!(
        "{user}'s \"{playlist}\" playlist!",
        user = username,
        playlist = config::YEAR_PLAYLIST_NAME
    );
    println!("{}", billboard(&header, '#', true));
    for track in &tracks {
        println!("{}", format_track(track));
    }
}
