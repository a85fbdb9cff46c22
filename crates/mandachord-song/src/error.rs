//! Error types for song decoding.

use thiserror::Error;

/// Errors that can occur while decoding a song record.
#[derive(Debug, Error)]
pub enum SongError {
    #[error("invalid base64 data in song '{name}': {source}")]
    InvalidBase64 {
        name: String,
        #[source]
        source: base64::DecodeError,
    },
}
