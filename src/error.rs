use std::fmt;

/// BIOS firmware images must be exactly this many bytes.
pub const FIRMWARE_SIZE: usize = 0x4000;
/// Cartridge ROM images larger than this cannot fit the ROM region.
pub const MAX_CARTRIDGE_SIZE: usize = 0x0200_0000;

#[derive(Debug)]
pub enum Error {
    /// Firmware image is not exactly 16 KiB.
    FirmwareSize { actual: usize },
    /// Cartridge image is larger than the 32 MiB ROM region.
    CartridgeTooLarge { actual: usize },
    /// Wrapper for I/O errors raised while reading images from disk.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirmwareSize { actual } => {
                write!(f, "firmware must be exactly {FIRMWARE_SIZE} bytes, got {actual}")
            }
            Self::CartridgeTooLarge { actual } => write!(
                f,
                "cartridge must be at most {MAX_CARTRIDGE_SIZE} bytes, got {actual}"
            ),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
