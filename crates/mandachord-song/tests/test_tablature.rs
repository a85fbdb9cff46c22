//! Tests for full tablature rendering of decoded songs.
//!
//! These tests build payloads with known note placements and check that each
//! note lands on the expected editor row and column.

use base64::Engine;
use mandachord_song::bits::{HEADER_LEN, PITCHES};
use mandachord_song::{decode, find_marker, Song, SongError, SEPARATOR};
use pretty_assertions::assert_eq;

// =============================================================================
// Helper Functions
// =============================================================================

/// Renders one expected note row with the given steps filled.
fn row(filled: &[usize]) -> String {
    let mut out = String::new();
    for step in 0..64 {
        if step % 16 == 0 {
            out.push_str("||");
        } else if step % 4 == 0 {
            out.push('|');
        }
        out.push(if filled.contains(&step) { 'O' } else { '.' });
    }
    out.push_str("||");
    out
}

/// Builds a payload with a full-volume header and the given (step, pitch) notes set.
fn payload_with_notes(notes: &[(usize, usize)]) -> Vec<u8> {
    let mut payload = vec![0u8; HEADER_LEN + 104];
    for &(step, pitch) in notes {
        let bit = step * PITCHES + pitch;
        payload[HEADER_LEN + bit / 8] |= 0x80 >> (bit % 8);
    }
    payload
}

fn encode(payload: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(payload)
}

/// Line index of a pitch row in rendered output (header and ruler take 5 lines).
fn line_of_pitch(pitch: usize) -> usize {
    let from_top = 12 - pitch;
    let separators_above = match pitch {
        10..=12 => 0,
        5..=9 => 1,
        _ => 2,
    };
    5 + from_top + separators_above
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_all_zero_marker_renders_blank_grid() {
    let line = format!(
        "[SONG-Test:{}:BardTennoPackA:BardCorpusPackA:BardGrineerPackA]",
        "A".repeat(100)
    );
    let marker = find_marker(&line).expect("marker should match");
    let song = Song::from_marker(&marker).unwrap();
    let rendered = song.tablature().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Name: Test");
    assert_eq!(lines[1], "Melody: Adau: 100%");
    assert_eq!(lines[2], "Bass: Alpha: 100%");
    assert_eq!(lines[3], "Percussion: Druk: 100%");
    assert_eq!(
        lines[4],
        "-----------1--------------------2--------------------3--------------------4-----------"
    );

    let blank = row(&[]);
    let note_rows: Vec<&str> = lines[5..].iter().copied().filter(|l| *l != SEPARATOR).collect();
    assert_eq!(note_rows.len(), 13);
    for note_row in note_rows {
        assert_eq!(note_row, blank);
    }
    assert_eq!(lines.last().copied(), Some(SEPARATOR));
}

#[test]
fn test_header_only_payload_renders_blank_grid() {
    let text = decode("Empty", &encode(&[0u8; 6]), "a", "b", "c").unwrap();
    assert_eq!(text.matches('O').count(), 0);
    assert_eq!(text.lines().count(), 21);
}

#[test]
fn test_notes_land_on_editor_rows_and_columns() {
    let notes = [(0, 0), (17, 12), (63, 5), (32, 10), (47, 6)];
    let text = decode("Notes", &encode(&payload_with_notes(&notes)), "a", "b", "c").unwrap();
    let lines: Vec<&str> = text.lines().collect();

    for pitch in 0..13 {
        let filled: Vec<usize> = notes
            .iter()
            .filter(|(_, p)| *p == pitch)
            .map(|(step, _)| *step)
            .collect();
        assert_eq!(lines[line_of_pitch(pitch)], row(&filled), "pitch {}", pitch);
    }
}

#[test]
fn test_full_render_of_sparse_song() {
    let payload = payload_with_notes(&[(0, 12), (4, 0)]);
    let text = decode("Sparse", &encode(&payload), "BardEDMPackA", "BardCorpusPackE", "NewPack").unwrap();

    let blank = row(&[]);
    let mut expected = String::new();
    expected.push_str("Name: Sparse\n");
    expected.push_str("Melody: Horos: 100%\n");
    expected.push_str("Bass: Epsilon: 100%\n");
    expected.push_str("Percussion: NewPack: 100%\n");
    expected.push_str("-----------1--------------------2--------------------3--------------------4-----------\n");
    for pitch in (0..13).rev() {
        let line = match pitch {
            12 => row(&[0]),
            0 => row(&[4]),
            _ => blank.clone(),
        };
        expected.push_str(&line);
        expected.push('\n');
        if pitch == 10 || pitch == 5 {
            expected.push_str(SEPARATOR);
            expected.push('\n');
        }
    }
    expected.push_str(SEPARATOR);
    expected.push('\n');

    assert_eq!(text, expected);
}

#[test]
fn test_truncated_payload_reads_trailing_steps_as_blank() {
    // Keep the header and the first 4 note bytes (steps 0-1 and part of 2).
    let mut payload = payload_with_notes(&[(0, 3), (1, 3), (40, 3)]);
    payload.truncate(HEADER_LEN + 4);
    let text = decode("Short", &encode(&payload), "a", "b", "c").unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[line_of_pitch(3)], row(&[0, 1]));
}

#[test]
fn test_every_payload_length_renders_thirteen_rows() {
    let full = payload_with_notes(&[(5, 5), (60, 9)]);
    for len in HEADER_LEN..=full.len() {
        let text = decode("Len", &encode(&full[..len]), "a", "b", "c").unwrap();
        let rows = text.lines().filter(|l| l.starts_with("||")).count();
        assert_eq!(rows, 13, "payload length {}", len);
    }
}

#[test]
fn test_short_payload_volumes_default_to_full() {
    let text = decode("Tiny", &encode(&[0xD1, 0xD2, 0x00]), "a", "b", "c").unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "Melody: a: 0%");
    assert_eq!(lines[2], "Bass: b: 100%");
    assert_eq!(lines[3], "Percussion: c: 100%");
}

#[test]
fn test_unknown_volume_is_reported_as_unknown() {
    let mut payload = vec![0u8; 6];
    payload[4] = 0x3F;
    payload[5] = 0x80;
    let text = decode("Vol", &encode(&payload), "a", "b", "c").unwrap();
    assert!(text.contains("Percussion: c: ?%\n"));
}

#[test]
fn test_invalid_base64_is_an_error() {
    let err = decode("Bad", "@@@@", "a", "b", "c").unwrap_err();
    assert!(matches!(err, SongError::InvalidBase64 { .. }));
}
