//! Locating `[SONG-...]` records in chat log lines.

use std::sync::OnceLock;

use regex::Regex;

/// Regex pattern for a shared song.
/// Format: `[SONG-<name>:<base64>:<melody>:<bass>:<percussion>]`.
const SONG_MARKER_PATTERN: &str = r"\[SONG-([^:\]]+):([^:\]]+):([^:]+):([^:]+):([^:\]]+)\]";

static SONG_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

fn song_marker_regex() -> &'static Regex {
    SONG_MARKER_REGEX.get_or_init(|| Regex::new(SONG_MARKER_PATTERN).expect("invalid regex pattern"))
}

/// Fields captured from a song marker, borrowed from the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongMarker<'a> {
    /// The full matched `[SONG-...]` text.
    pub raw: &'a str,
    pub name: &'a str,
    /// Base64 payload, still encoded.
    pub data: &'a str,
    pub melody: &'a str,
    pub bass: &'a str,
    pub percussion: &'a str,
}

/// Finds the first song marker in `line`.
///
/// # Examples
/// ```
/// use mandachord_song::marker::find_marker;
///
/// let line = "12.3 Sys [Info]: [SONG-Tune:AAAAAAAA:BardTennoPackA:BardCorpusPackA:BardEDMPackA]";
/// let marker = find_marker(line).unwrap();
/// assert_eq!(marker.name, "Tune");
/// assert_eq!(marker.percussion, "BardEDMPackA");
/// assert!(find_marker("nothing to see here").is_none());
/// ```
pub fn find_marker(line: &str) -> Option<SongMarker<'_>> {
    let caps = song_marker_regex().captures(line)?;
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    Some(SongMarker {
        raw: field(0),
        name: field(1),
        data: field(2),
        melody: field(3),
        bass: field(4),
        percussion: field(5),
    })
}
