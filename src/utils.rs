use crate::types::{Playlist, Track};

/// Wraps a string like a billboard.
///
/// Input:
/// Hey there!
///
/// Output:
/// ##############
/// # Hey there! #
/// ##############
pub fn billboard(text: &str, wrapper: char, wrap_sides: bool) -> String {
    let center_line = if wrap_sides {
        format!("{wrapper} {text} {wrapper}")
    } else {
        text.to_string()
    };
    let border: String = wrapper.to_string().repeat(center_line.chars().count());
    format!("{border}\n{center_line}\n{border}")
}

/// Renders a track as `{artist} // {name} [{album}]`.
pub fn format_track(track: &Track) -> String {
    format!(
        "{artist} // {name} [{album}]",
        artist = track.artist,
        name = track.name,
        album = track.album
    )
}

/// Linear scan over a user's playlists for an exact, case-sensitive name
/// match. The first match in API return order wins; substring matches do
/// not count.
pub fn find_playlist_by_name<'a>(playlists: &'a [Playlist], name: &str) -> Option<&'a Playlist> {
    playlists.iter().find(|playlist| playlist.name == name)
}
