//! Random bit access over the packed note matrix.
//!
//! After the volume header, a payload stores 64 time steps of 13 note bits
//! each, step-major, with the first bit of every byte in its most significant
//! position. The editor shows the same data transposed: pitches as rows and
//! time steps as columns. Rather than unpacking the whole matrix,
//! [`NoteGrid`] reads single bits on demand.
//!
//! When the trailing steps of a song are blank the game leaves them out of
//! the payload entirely, so every read past the end of the buffer is a zero.

/// Order of bits inside each byte of a packed bit matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 0 of the matrix is the most significant bit of the byte. This is
    /// what the game's song encoder calls "little-endian".
    MsbFirst,
    /// Bit 0 of the matrix is the least significant bit of the byte.
    LsbFirst,
}

/// Reads a single bit from `bytes`, viewed as a bit matrix of `num_columns`
/// bits per row that starts `offset` bytes into the buffer.
///
/// Returns `false` for any bit past the end of `bytes`.
///
/// # Examples
/// ```
/// use mandachord_song::bits::{get_bit, BitOrder};
///
/// let bytes = [0xFF, 0b1000_0000];
/// assert!(get_bit(&bytes, 13, 0, 0, BitOrder::MsbFirst, 1));
/// assert!(!get_bit(&bytes, 13, 0, 1, BitOrder::MsbFirst, 1));
/// assert!(!get_bit(&bytes, 13, 4, 0, BitOrder::MsbFirst, 1));
/// ```
pub fn get_bit(
    bytes: &[u8],
    num_columns: usize,
    row: usize,
    column: usize,
    order: BitOrder,
    offset: usize,
) -> bool {
    let bit = row * num_columns + column;
    let shift = match order {
        BitOrder::MsbFirst => 7 - (bit & 0x07),
        BitOrder::LsbFirst => bit & 0x07,
    };
    match bytes.get(offset + (bit >> 3)) {
        Some(byte) => (byte >> shift) & 0x01 == 1,
        None => false,
    }
}

/// Number of pitch rows, from the lowest melody note to the highest
/// percussion note.
pub const PITCHES: usize = 13;
/// Number of time steps in a song.
pub const STEPS: usize = 64;
/// Time steps per measure.
pub const STEPS_PER_MEASURE: usize = 16;
/// Time steps per beat.
pub const STEPS_PER_BEAT: usize = 4;
/// Length of the volume header that precedes the note bits.
pub const HEADER_LEN: usize = 6;

/// Borrowed view of the note matrix of a song payload.
#[derive(Debug, Clone, Copy)]
pub struct NoteGrid<'a> {
    payload: &'a [u8],
}

impl<'a> NoteGrid<'a> {
    /// Wraps a full song payload, volume header included.
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    /// Returns true if the note at `pitch` is filled at time `step`.
    ///
    /// Pitch 0 is the bottom row of the editor.
    pub fn is_set(&self, step: usize, pitch: usize) -> bool {
        get_bit(
            self.payload,
            PITCHES,
            step,
            pitch,
            BitOrder::MsbFirst,
            HEADER_LEN,
        )
    }

    /// Number of filled notes in the whole song.
    pub fn note_count(&self) -> usize {
        (0..STEPS)
            .flat_map(|step| (0..PITCHES).map(move |pitch| (step, pitch)))
            .filter(|&(step, pitch)| self.is_set(step, pitch))
            .count()
    }

    /// Number of time steps at least partially present in the payload.
    ///
    /// Anything from this step on was truncated by the encoder and reads blank.
    pub fn encoded_steps(&self) -> usize {
        let note_bits = self.payload.len().saturating_sub(HEADER_LEN) * 8;
        note_bits.div_ceil(PITCHES).min(STEPS)
    }
}
