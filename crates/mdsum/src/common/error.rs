//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while inspecting a ROM buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomError {
    #[error("ROM file must be 512 bytes or more")]
    TooShort { len: usize },
}

/// Errors that end a patch run
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("no arguments")]
    Usage,

    #[error("failed to read {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    InputTooShort(#[from] RomError),

    #[error("failed to create {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("checksum mismatch: stored 0x{stored:X}, computed 0x{computed:X}")]
    ChecksumMismatch { stored: u16, computed: u16 },
}

impl PatchError {
    pub fn input_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    pub fn output_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputCreate {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type PatchResult<T> = Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_too_short_message() {
        let err = PatchError::from(RomError::TooShort { len: 10 });
        assert_eq!(err.to_string(), "ROM file must be 512 bytes or more");
    }

    #[test]
    fn test_io_message_carries_reason() {
        let err = PatchError::input_read(
            "game.bin",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "failed to read game.bin: no such file");
    }

    #[test]
    fn test_output_messages_carry_reason() {
        let err = PatchError::output_write(
            "out.bin",
            io::Error::new(io::ErrorKind::Other, "no space left on device"),
        );
        assert!(matches!(err, PatchError::OutputWrite { .. }));
        assert_eq!(
            err.to_string(),
            "failed to write out.bin: no space left on device"
        );

        let err = PatchError::output_create(
            "out.bin",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to create out.bin: permission denied"
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = PatchError::ChecksumMismatch {
            stored: 0x1234,
            computed: 0xABCD,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: stored 0x1234, computed 0xABCD"
        );
    }
}
