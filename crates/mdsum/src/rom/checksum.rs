//! Sega Megadrive ROM checksum calculation
//!
//! The checksum is the 16-bit wrapping sum of all big-endian words from
//! offset 0x200 to the end of the ROM, stored big-endian at offset 0x18E.

use crate::common::RomError;

/// Offset of the checksum field in the ROM header
pub const CHECKSUM_OFFSET: usize = 0x18E;
/// End (exclusive) of the checksum field
pub const CHECKSUM_END: usize = 0x190;
/// First byte covered by the checksum
pub const REGION_START: usize = 0x200;
/// Smallest image that holds a full vector table and header
pub const MIN_ROM_SIZE: usize = REGION_START;

/// Old and new values of the header checksum field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumPatch {
    /// Value stored in the header before patching
    pub old: u16,
    /// Freshly computed value
    pub new: u16,
}

impl ChecksumPatch {
    pub fn changed(&self) -> bool {
        self.old != self.new
    }
}

/// Calculate the checksum of a checksum region
///
/// `region` is the slice starting at offset 0x200. Only complete words are
/// summed; a dangling final byte is ignored.
pub fn compute_checksum(region: &[u8]) -> u16 {
    region
        .chunks_exact(2)
        .map(|word| u16::from_be_bytes([word[0], word[1]]))
        .fold(0u16, u16::wrapping_add)
}

fn check_len(image: &[u8]) -> Result<(), RomError> {
    if image.len() < MIN_ROM_SIZE {
        return Err(RomError::TooShort { len: image.len() });
    }
    Ok(())
}

/// Read the checksum currently stored in the header
pub fn stored_checksum(image: &[u8]) -> Result<u16, RomError> {
    check_len(image)?;
    Ok(u16::from_be_bytes([
        image[CHECKSUM_OFFSET],
        image[CHECKSUM_OFFSET + 1],
    ]))
}

/// Compare the stored checksum with a fresh one without touching the image
pub fn verify(image: &[u8]) -> Result<ChecksumPatch, RomError> {
    let old = stored_checksum(image)?;
    let new = compute_checksum(&image[REGION_START..]);
    Ok(ChecksumPatch { old, new })
}

/// Recompute the checksum and write it into the header field
///
/// The previous field value is read before it is overwritten.
pub fn patch(image: &mut [u8]) -> Result<ChecksumPatch, RomError> {
    let result = verify(image)?;
    image[CHECKSUM_OFFSET..CHECKSUM_END].copy_from_slice(&result.new.to_be_bytes());
    Ok(result)
}
