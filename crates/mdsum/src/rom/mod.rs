//! Sega Megadrive/Genesis ROM images
//!
//! A ROM starts with the vector table (0x000-0x0FF) and the header
//! (0x100-0x1FF). The header carries a checksum over everything from
//! 0x200 onwards.

mod checksum;
mod image;

pub use checksum::{
    CHECKSUM_END, CHECKSUM_OFFSET, ChecksumPatch, MIN_ROM_SIZE, REGION_START, compute_checksum,
    patch, stored_checksum, verify,
};
pub use image::RomImage;
