//! Instrument parts and their volume slider encoding.
//!
//! The first six bytes of a song payload hold one two-byte volume pair per
//! part, stored percussion first. Only two pair values have a known meaning:
//! all zeros is a full slider and `D1 D2` is a muted one. Every other pair is
//! reported as unknown.

use std::fmt;

/// One of the three instrument parts of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Melody,
    Bass,
    Percussion,
}

impl Part {
    /// All parts in display order.
    pub const ALL: [Part; 3] = [Part::Melody, Part::Bass, Part::Percussion];

    /// Header label used in rendered tablature.
    pub fn label(&self) -> &'static str {
        match self {
            Part::Melody => "Melody",
            Part::Bass => "Bass",
            Part::Percussion => "Percussion",
        }
    }

    /// Byte offset of this part's volume pair within the payload.
    pub fn volume_offset(&self) -> usize {
        match self {
            Part::Melody => 0,
            Part::Bass => 2,
            Part::Percussion => 4,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decoded volume slider of a single part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volume {
    /// Slider at 100% (`00 00`).
    Full,
    /// Slider at 0% (`D1 D2`).
    Silent,
    /// Any other pair. The raw bytes are kept for diagnostics only.
    Unknown { raw: [u8; 2] },
}

/// Byte pair of a muted slider.
const SILENT_PAIR: [u8; 2] = [0xD1, 0xD2];

impl Volume {
    /// Classifies a volume byte pair.
    pub fn from_pair(b1: u8, b2: u8) -> Self {
        match [b1, b2] {
            [0x00, 0x00] => Volume::Full,
            SILENT_PAIR => Volume::Silent,
            raw => Volume::Unknown { raw },
        }
    }

    /// Percentage string shown next to the instrument name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Volume::Full => "100%",
            Volume::Silent => "0%",
            Volume::Unknown { .. } => "?%",
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads the volume pair starting at `offset`. Bytes past the end of the
/// payload read as zero.
pub fn volume_at(payload: &[u8], offset: usize) -> Volume {
    let byte = |i: usize| payload.get(i).copied().unwrap_or(0);
    Volume::from_pair(byte(offset), byte(offset + 1))
}
