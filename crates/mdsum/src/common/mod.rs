//! Common infrastructure shared by the ROM layer and the driver

mod error;

pub use error::{PatchError, PatchResult, RomError};
