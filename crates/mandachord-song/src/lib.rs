//! Mandachord Song - decoding of songs shared through in-game chat
//!
//! Songs composed in the Mandachord are shared in chat as a `[SONG-...]`
//! marker carrying the song name, a base64 payload and the three instrument
//! packs. This crate finds those markers, decodes the payload, and renders
//! the song as ASCII tablature laid out like the in-game editor.
//!
//! # Payload Layout
//!
//! - Bytes 0..6: volume pairs for melody, bass and percussion
//! - Remaining bytes: 64 time steps of 13 note bits, most significant bit first,
//!   with blank trailing steps truncated
//!
//! # Example
//!
//! ```
//! use mandachord_song::{find_marker, Song};
//!
//! let line = "[SONG-Tune:AAAAAAAA:BardTennoPackA:BardCorpusPackA:BardGrineerPackA]";
//! let marker = find_marker(line).unwrap();
//! let song = Song::from_marker(&marker).unwrap();
//! print!("{}", song.tablature());
//! ```
//!
//! # Module Structure
//!
//! - [`instruments`]: Instrument pack display names
//! - [`volume`]: Instrument parts and volume sliders
//! - [`bits`]: Random access into the packed note matrix
//! - [`marker`]: `[SONG-...]` marker scanning
//! - [`song`]: Song records and tablature rendering

pub mod bits;
pub mod error;
pub mod instruments;
pub mod marker;
pub mod song;
pub mod volume;

pub use bits::{get_bit, BitOrder, NoteGrid};
pub use error::SongError;
pub use instruments::{is_known_pack, pack_name, KNOWN_PACKS};
pub use marker::{find_marker, SongMarker};
pub use song::{decode, Song, Tablature, RULER, SEPARATOR};
pub use volume::{volume_at, Part, Volume};
