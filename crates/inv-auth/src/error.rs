use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors related to session and token handling.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: expected 3 segments, found {segments} {location}")]
    MalformedToken {
        segments: usize,
        location: ErrorLocation,
    },

    #[error("Token payload is not valid base64url: {source} {location}")]
    PayloadEncoding {
        #[source]
        source: base64::DecodeError,
        location: ErrorLocation,
    },

    #[error("Token payload is not a claims object: {source} {location}")]
    PayloadJson {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Session storage error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Whether this error came from decoding a token rather than storage.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken { .. } | Self::PayloadEncoding { .. } | Self::PayloadJson { .. }
        )
    }

    /// Creates MalformedToken error at caller location.
    #[track_caller]
    pub fn malformed_token(segments: usize) -> Self {
        Self::MalformedToken {
            segments,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates PayloadEncoding error at caller location.
    #[track_caller]
    pub fn payload_encoding(source: base64::DecodeError) -> Self {
        Self::PayloadEncoding {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates PayloadJson error at caller location.
    #[track_caller]
    pub fn payload_json(source: serde_json::Error) -> Self {
        Self::PayloadJson {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Storage error at caller location.
    #[track_caller]
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        Self::Storage {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Serialization error at caller location.
    #[track_caller]
    pub fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
