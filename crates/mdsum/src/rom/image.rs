//! Loading and saving ROM images

use super::checksum::{self, ChecksumPatch, MIN_ROM_SIZE};
use crate::common::{PatchError, PatchResult, RomError};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// A ROM image held fully in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Wrap an in-memory buffer, rejecting images without a full header
    pub fn from_bytes(data: Vec<u8>) -> PatchResult<Self> {
        if data.len() < MIN_ROM_SIZE {
            return Err(RomError::TooShort { len: data.len() }.into());
        }
        Ok(Self { data })
    }

    /// Read a ROM file
    pub fn load(path: &Path) -> PatchResult<Self> {
        let data = fs::read(path).map_err(|e| PatchError::input_read(path, e))?;
        Self::from_bytes(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Recompute the header checksum in place
    pub fn patch_checksum(&mut self) -> PatchResult<ChecksumPatch> {
        Ok(checksum::patch(&mut self.data)?)
    }

    /// Stored and computed checksum, without modifying the image
    pub fn verify_checksum(&self) -> PatchResult<ChecksumPatch> {
        Ok(checksum::verify(&self.data)?)
    }

    /// Write the image to `path`, creating or truncating it
    ///
    /// Returns the number of bytes written.
    pub fn save(&self, path: &Path) -> PatchResult<usize> {
        let mut file = File::create(path).map_err(|e| PatchError::output_create(path, e))?;
        file.write_all(&self.data)
            .and_then(|()| file.flush())
            .map_err(|e| PatchError::output_write(path, e))?;
        Ok(self.data.len())
    }
}
