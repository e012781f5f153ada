//! Patch run orchestration: load, checksum, write back

use crate::common::{PatchError, PatchResult};
use crate::rom::{ChecksumPatch, RomImage};
use log::debug;
use std::path::{Path, PathBuf};

/// What to do with the loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Recompute the checksum and write the patched image
    #[default]
    Patch,
    /// Only compare the stored checksum with the computed one
    Check,
}

/// One run of the tool
#[derive(Debug, Clone)]
pub struct Invocation {
    pub input: PathBuf,
    /// Destination; `None` overwrites the input
    pub output: Option<PathBuf>,
    pub mode: Mode,
}

impl Invocation {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            mode: Mode::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn destination(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Patched {
        checksum: ChecksumPatch,
        bytes_written: usize,
        destination: PathBuf,
    },
    Verified {
        checksum: u16,
    },
}

/// Execute an invocation
///
/// The output file is only created once the input has been read and
/// validated, so a failed run never leaves a truncated file behind.
pub fn run(invocation: &Invocation) -> PatchResult<Report> {
    let mut rom = RomImage::load(&invocation.input)?;
    debug!(
        "loaded {} bytes from {}",
        rom.len(),
        invocation.input.display()
    );

    match invocation.mode {
        Mode::Check => {
            let checksum = rom.verify_checksum()?;
            if checksum.changed() {
                return Err(PatchError::ChecksumMismatch {
                    stored: checksum.old,
                    computed: checksum.new,
                });
            }
            Ok(Report::Verified {
                checksum: checksum.new,
            })
        }
        Mode::Patch => {
            let checksum = rom.patch_checksum()?;
            let destination = invocation.destination().to_path_buf();
            let bytes_written = rom.save(&destination)?;
            Ok(Report::Patched {
                checksum,
                bytes_written,
                destination,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::{CHECKSUM_OFFSET, REGION_START};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn sample_rom() -> Vec<u8> {
        let mut data = vec![0u8; REGION_START + 4];
        data[CHECKSUM_OFFSET] = 0x12;
        data[CHECKSUM_OFFSET + 1] = 0x34;
        data[REGION_START + 1] = 0x01;
        data[REGION_START + 3] = 0x02;
        data
    }

    #[test]
    fn test_patch_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.bin");
        fs::write(&path, sample_rom()).unwrap();

        let report = run(&Invocation::new(&path)).unwrap();
        assert_eq!(
            report,
            Report::Patched {
                checksum: ChecksumPatch {
                    old: 0x1234,
                    new: 0x0003
                },
                bytes_written: REGION_START + 4,
                destination: path.clone(),
            }
        );
        let patched = fs::read(&path).unwrap();
        assert_eq!(&patched[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2], &[0x00, 0x03]);
    }

    #[test]
    fn test_patch_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, sample_rom()).unwrap();

        run(&Invocation::new(&input).with_output(&output)).unwrap();
        assert_eq!(fs::read(&input).unwrap(), sample_rom());
        assert_eq!(fs::read(&output).unwrap()[CHECKSUM_OFFSET + 1], 0x03);
    }

    #[test]
    fn test_short_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, [0u8; 100]).unwrap();

        let err = run(&Invocation::new(&input).with_output(&output)).unwrap_err();
        assert!(matches!(err, PatchError::InputTooShort(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_check_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.bin");
        fs::write(&path, sample_rom()).unwrap();

        let err = run(&Invocation::new(&path).with_mode(Mode::Check)).unwrap_err();
        assert!(matches!(
            err,
            PatchError::ChecksumMismatch {
                stored: 0x1234,
                computed: 0x0003
            }
        ));
        assert_eq!(fs::read(&path).unwrap(), sample_rom());

        run(&Invocation::new(&path)).unwrap();
        let report = run(&Invocation::new(&path).with_mode(Mode::Check)).unwrap();
        assert_eq!(report, Report::Verified { checksum: 0x0003 });
    }
}
