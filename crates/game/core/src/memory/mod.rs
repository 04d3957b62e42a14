//! Read-only access to the emulated address space.
//!
//! [`MemoryView`] is the only seam between the decoder and the emulator. The
//! decoder never writes through it; every decode cycle works against one
//! point-in-time view.
pub mod addr;

use crate::error::{DecoderError, ErrorSeverity};

/// Errors raised by a memory view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// The requested range is not backed by the view.
    #[error("read of {len} byte(s) at {address:#06X} is out of range")]
    OutOfRange { address: u16, len: usize },

    /// The underlying emulator could not service the read.
    #[error("memory unavailable: {0}")]
    Unavailable(String),
}

impl DecoderError for MemoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "MEMORY_OUT_OF_RANGE",
            Self::Unavailable(_) => "MEMORY_UNAVAILABLE",
        }
    }
}

/// Byte-addressable, read-only view over the game's memory.
pub trait MemoryView {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError>;

    fn read_slice(&self, address: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        (0..len)
            .map(|offset| {
                let target = usize::from(address)
                    .checked_add(offset)
                    .and_then(|target| u16::try_from(target).ok())
                    .ok_or(MemoryError::OutOfRange { address, len })?;
                self.read_byte(target)
            })
            .collect()
    }

    /// Reads a big-endian 16-bit value.
    fn read_u16_be(&self, address: u16) -> Result<u16, MemoryError> {
        match self.read_slice(address, 2)?.as_slice() {
            [high, low] => Ok(u16::from_be_bytes([*high, *low])),
            _ => Err(MemoryError::OutOfRange { address, len: 2 }),
        }
    }
}

impl<T: MemoryView + ?Sized> MemoryView for &T {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        (**self).read_byte(address)
    }

    fn read_slice(&self, address: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        (**self).read_slice(address, len)
    }
}

/// A plain byte slice is a flat address space starting at zero.
impl MemoryView for [u8] {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        self.get(usize::from(address))
            .copied()
            .ok_or(MemoryError::OutOfRange { address, len: 1 })
    }

    fn read_slice(&self, address: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        let start = usize::from(address);
        start
            .checked_add(len)
            .and_then(|end| self.get(start..end))
            .map(<[u8]>::to_vec)
            .ok_or(MemoryError::OutOfRange { address, len })
    }
}

/// Owned copy of the full 64 KiB address space.
///
/// Used for offline fixtures and for freezing an emulator read into a single
/// point-in-time image.
#[derive(Clone, PartialEq, Eq)]
pub struct RamImage {
    bytes: Box<[u8]>,
}

impl RamImage {
    pub const SIZE: usize = 0x1_0000;

    /// Creates a zero-filled image.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; Self::SIZE].into_boxed_slice(),
        }
    }

    /// Copies `len` bytes starting at `address` out of another view.
    pub fn capture<M: MemoryView + ?Sized>(
        source: &M,
        address: u16,
        len: usize,
    ) -> Result<Self, MemoryError> {
        let mut image = Self::new();
        let bytes = source.read_slice(address, len)?;
        image.write(address, &bytes);
        Ok(image)
    }

    /// Writes bytes starting at `address`; bytes past the end are dropped.
    pub fn write(&mut self, address: u16, bytes: &[u8]) -> &mut Self {
        let start = usize::from(address);
        let end = (start + bytes.len()).min(Self::SIZE);
        self.bytes[start..end].copy_from_slice(&bytes[..end - start]);
        self
    }

    pub fn set(&mut self, address: u16, value: u8) -> &mut Self {
        self.bytes[usize::from(address)] = value;
        self
    }

    pub fn set_u16_be(&mut self, address: u16, value: u16) -> &mut Self {
        self.write(address, &value.to_be_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for RamImage {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for RamImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RamImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl MemoryView for RamImage {
    fn read_byte(&self, address: u16) -> Result<u8, MemoryError> {
        self.bytes.read_byte(address)
    }

    fn read_slice(&self, address: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.bytes.read_slice(address, len)
    }
}
