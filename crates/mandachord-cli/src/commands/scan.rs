//! Scan command implementation
//!
//! Reads a game log line by line, finds shared `[SONG-...]` markers and prints
//! each one followed by its tablature.

use anyhow::{Context, Result};
use mandachord_song::{find_marker, is_known_pack, Part, Song, SongMarker, Volume};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

/// Counters collected while scanning a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines read from the log.
    pub lines: usize,
    /// Songs decoded and printed.
    pub songs: usize,
    /// Markers whose payload could not be decoded.
    pub failed: usize,
}

/// Run the scan command
///
/// # Arguments
/// * `log_path` - Path to the game log to scan
///
/// # Returns
/// Exit code: 0 once the whole log was scanned, even if some records failed to decode
pub fn run(log_path: &Path) -> Result<ExitCode> {
    let file = File::open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scan_reader(BufReader::new(file), &mut out)
        .with_context(|| format!("Failed to scan log file: {}", log_path.display()))?;
    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            return Err(e).context("Failed to flush output");
        }
        _ => {}
    }

    tracing::info!(
        lines = summary.lines,
        songs = summary.songs,
        failed = summary.failed,
        "Scanned {}",
        log_path.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Scans every line of `reader` and writes the report for each song marker to `out`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so binary
/// noise in the log never stops the scan. A marker whose payload fails to
/// decode is reported with an `error:` line and scanning continues. If `out`
/// is closed by the reader (a broken pipe) the scan stops early without error.
pub fn scan_reader<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some(marker) = find_marker(&line) else {
            continue;
        };

        if let Err(e) = write_record(out, &marker, &mut summary) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                tracing::debug!(line = summary.lines, "Output closed, stopping scan");
                break;
            }
            return Err(e.into());
        }
    }

    Ok(summary)
}

fn write_record<W: Write>(
    out: &mut W,
    marker: &SongMarker<'_>,
    summary: &mut ScanSummary,
) -> io::Result<()> {
    writeln!(out, "{}", marker.raw)?;
    match Song::from_marker(marker) {
        Ok(song) => {
            log_song(&song, summary.lines);
            write!(out, "{}", song.tablature())?;
            summary.songs += 1;
        }
        Err(e) => {
            tracing::warn!(line = summary.lines, "Skipping song: {}", e);
            writeln!(out, "error: {}", e)?;
            summary.failed += 1;
        }
    }
    Ok(())
}

fn log_song(song: &Song, line: usize) {
    let grid = song.grid();
    tracing::debug!(
        line,
        name = %song.name,
        bytes = song.payload.len(),
        notes = grid.note_count(),
        steps = grid.encoded_steps(),
        "Decoded song"
    );
    for part in Part::ALL {
        let id = song.instrument_id(part);
        if !is_known_pack(id) {
            tracing::debug!(line, part = %part, id, "Unmapped instrument pack");
        }
        if let Volume::Unknown { raw } = song.volume(part) {
            tracing::debug!(line, part = %part, raw = ?raw, "Unrecognized volume bytes");
        }
    }
}
