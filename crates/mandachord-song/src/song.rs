//! Song records and their tablature rendering.

use std::fmt;

use base64::Engine;

use crate::bits::{NoteGrid, PITCHES, STEPS, STEPS_PER_BEAT, STEPS_PER_MEASURE};
use crate::error::SongError;
use crate::instruments::pack_name;
use crate::marker::SongMarker;
use crate::volume::{volume_at, Part, Volume};

/// Ruler printed above the note rows, numbering the four measures.
pub const RULER: &str =
    "-----------1--------------------2--------------------3--------------------4-----------";

/// Full-width separator between instrument sections.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------------";

/// Pitch rows after which a section separator is drawn, counting down from the top.
const SECTION_BREAKS: [usize; 2] = [10, 5];

/// A decoded song record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    /// Raw payload: six volume bytes followed by the packed note matrix.
    pub payload: Vec<u8>,
    pub melody: String,
    pub bass: String,
    pub percussion: String,
}

impl Song {
    /// Decodes a song from its marker fields.
    ///
    /// `data` must use the standard base64 alphabet.
    pub fn decode(
        name: &str,
        data: &str,
        melody: &str,
        bass: &str,
        percussion: &str,
    ) -> Result<Self, SongError> {
        let payload = base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|source| SongError::InvalidBase64 {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            name: name.to_string(),
            payload,
            melody: melody.to_string(),
            bass: bass.to_string(),
            percussion: percussion.to_string(),
        })
    }

    /// Decodes a song from a marker found in a log line.
    pub fn from_marker(marker: &SongMarker<'_>) -> Result<Self, SongError> {
        Self::decode(
            marker.name,
            marker.data,
            marker.melody,
            marker.bass,
            marker.percussion,
        )
    }

    /// Instrument pack identifier assigned to `part`.
    pub fn instrument_id(&self, part: Part) -> &str {
        match part {
            Part::Melody => &self.melody,
            Part::Bass => &self.bass,
            Part::Percussion => &self.percussion,
        }
    }

    /// Display name of the instrument pack assigned to `part`.
    pub fn instrument(&self, part: Part) -> &str {
        pack_name(self.instrument_id(part))
    }

    /// Volume slider of `part`.
    pub fn volume(&self, part: Part) -> Volume {
        volume_at(&self.payload, part.volume_offset())
    }

    /// Note matrix of the song.
    pub fn grid(&self) -> NoteGrid<'_> {
        NoteGrid::new(&self.payload)
    }

    /// Tablature view of the song, rendered through [`fmt::Display`].
    pub fn tablature(&self) -> Tablature<'_> {
        Tablature { song: self }
    }
}

/// ASCII tablature of a song, laid out like the in-game editor.
#[derive(Debug, Clone, Copy)]
pub struct Tablature<'a> {
    song: &'a Song,
}

impl Tablature<'_> {
    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        grid: &NoteGrid<'_>,
        pitch: usize,
    ) -> fmt::Result {
        for step in 0..STEPS {
            if step % STEPS_PER_MEASURE == 0 {
                f.write_str("||")?;
            } else if step % STEPS_PER_BEAT == 0 {
                f.write_str("|")?;
            }
            f.write_str(if grid.is_set(step, pitch) { "O" } else { "." })?;
        }
        f.write_str("||\n")
    }
}

impl fmt::Display for Tablature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let song = self.song;
        writeln!(f, "Name: {}", song.name)?;
        for part in Part::ALL {
            writeln!(f, "{}: {}: {}", part, song.instrument(part), song.volume(part))?;
        }

        writeln!(f, "{}", RULER)?;
        let grid = song.grid();
        for pitch in (0..PITCHES).rev() {
            self.write_row(f, &grid, pitch)?;
            if SECTION_BREAKS.contains(&pitch) {
                writeln!(f, "{}", SEPARATOR)?;
            }
        }
        writeln!(f, "{}", SEPARATOR)
    }
}

/// Decodes a song and renders it as tablature text.
///
/// # Examples
/// ```
/// use mandachord_song::decode;
///
/// let text = decode("Quiet", "AAAAAAAA", "BardTennoPackA", "BardCorpusPackA", "Custom").unwrap();
/// assert!(text.starts_with("Name: Quiet\nMelody: Adau: 100%\nBass: Alpha: 100%\nPercussion: Custom: 100%\n"));
/// assert!(decode("Broken", "not base64!", "a", "b", "c").is_err());
/// ```
pub fn decode(
    name: &str,
    data: &str,
    melody: &str,
    bass: &str,
    percussion: &str,
) -> Result<String, SongError> {
    let song = Song::decode(name, data, melody, bass, percussion)?;
    Ok(song.tablature().to_string())
}
