use topscli::types::{Playlist, Track};
use topscli::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, artist: &str, album: &str) -> Track {
    Track {
        name: name.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
    }
}

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_billboard_without_side_wrapping() {
    let block = billboard("Hi", '#', false);
    let lines: Vec<&str> = block.lines().collect();

    // Should be exactly 3 lines
    assert_eq!(lines.len(), 3);

    // Center line is the text itself, borders match its width
    assert_eq!(lines[0], "##");
    assert_eq!(lines[1], "Hi");
    assert_eq!(lines[2], "##");
}

#[test]
fn test_billboard_with_side_wrapping() {
    let block = billboard("Hi", '#', true);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines.len(), 3);

    // Center line is padded as wrapper-space-text-space-wrapper
    assert_eq!(lines[1], "# Hi #");

    // Borders consist solely of the wrapper character
    assert!(lines[0].chars().all(|c| c == '#'));
    assert!(lines[2].chars().all(|c| c == '#'));

    // All three lines must be equally wide
    assert_eq!(lines[0].chars().count(), 6);
    assert_eq!(lines[1].chars().count(), 6);
    assert_eq!(lines[2].chars().count(), 6);
}

#[test]
fn test_billboard_longer_text() {
    let block = billboard("Hey there!", '#', true);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines[0], "##############");
    assert_eq!(lines[1], "# Hey there! #");
    assert_eq!(lines[2], "##############");
}

#[test]
fn test_billboard_alternate_wrapper() {
    let block = billboard("abc", '*', false);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines[0], "***");
    assert_eq!(lines[1], "abc");
    assert_eq!(lines[2], "***");
}

#[test]
fn test_format_track() {
    let track = create_test_track("X", "Y", "Z");
    assert_eq!(format_track(&track), "Y // X [Z]");
}

#[test]
fn test_format_track_contains_separators() {
    let track = create_test_track("Song Name", "Some Artist", "Some Album");
    let line = format_track(&track);

    assert!(line.contains(" // "));
    assert!(line.ends_with("[Some Album]"));
    assert!(line.starts_with("Some Artist"));
}

#[test]
fn test_find_playlist_by_name_exact_match() {
    let playlists = vec![
        create_test_playlist("id1", "Road Trip"),
        create_test_playlist("id2", "Your Top Songs 2017"),
        create_test_playlist("id3", "Workout"),
    ];

    let found = find_playlist_by_name(&playlists, "Your Top Songs 2017");
    assert_eq!(found.map(|p| p.id.as_str()), Some("id2"));
}

#[test]
fn test_find_playlist_by_name_is_case_sensitive() {
    let playlists = vec![create_test_playlist("id1", "Your Top Songs 2017")];

    assert!(find_playlist_by_name(&playlists, "your top songs 2017").is_none());
    assert!(find_playlist_by_name(&playlists, "YOUR TOP SONGS 2017").is_none());
}

#[test]
fn test_find_playlist_by_name_no_substring_match() {
    let playlists = vec![create_test_playlist(
        "id1",
        "Your Top Songs 2017 (backup)",
    )];

    // A playlist whose name merely contains the target must not match
    assert!(find_playlist_by_name(&playlists, "Your Top Songs 2017").is_none());
}

#[test]
fn test_find_playlist_by_name_first_match_wins() {
    let playlists = vec![
        create_test_playlist("id1", "Your Top Songs 2017"),
        create_test_playlist("id2", "Your Top Songs 2017"),
    ];

    let found = find_playlist_by_name(&playlists, "Your Top Songs 2017");
    assert_eq!(found.map(|p| p.id.as_str()), Some("id1"));
}

#[test]
fn test_find_playlist_by_name_empty_list() {
    let playlists: Vec<Playlist> = Vec::new();
    assert!(find_playlist_by_name(&playlists, "Your Top Songs 2017").is_none());
}
