//! mdsum - checksum patcher for Sega Megadrive/Genesis ROM images
//!
//! The library is organized into:
//! - **ROM** (`rom/`): checksum calculation and image I/O
//! - **Driver** (`driver/`): one load/patch/write run
//! - **Common** (`common/`): error types

pub mod common;
pub mod driver;
pub mod rom;

// Re-exports for convenience
pub use common::{PatchError, PatchResult, RomError};
pub use driver::{Invocation, Mode, Report, run};
pub use rom::{ChecksumPatch, RomImage, compute_checksum, patch};
