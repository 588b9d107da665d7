//! Program image loading from disk.
//!
//! [`FileSource`] adapts an open file to the core's [`RomSource`] pull
//! interface: the size comes from the file metadata, then bytes are
//! streamed in order. Load failures are ordinary host-side errors, never
//! interrupt codes.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use abacus_core::rom::RomSource;
use abacus_core::vm::Vm;

/// Errors that can occur while loading a program image.
#[derive(Debug)]
pub enum LoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(io::Error),

    /// Image too large for 32-bit program addressing.
    TooLarge(u64),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TooLarge(size) => {
                write!(f, "image is {size} bytes; the program counter addresses at most 4 GiB")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A [`RomSource`] over an open file.
pub struct FileSource {
    file: BufReader<File>,
    size: u32,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        if len > u64::from(u32::MAX) {
            return Err(LoadError::TooLarge(len));
        }
        Ok(Self {
            file: BufReader::new(file),
            size: len as u32,
        })
    }
}

impl RomSource for FileSource {
    fn size(&mut self) -> u32 {
        self.size
    }

    fn read(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        match self.file.read_exact(&mut byte) {
            Ok(()) => byte[0],
            // A file truncated mid-load pads with zeros.
            Err(_) => 0,
        }
    }
}

/// Open `path` and load it into the VM as its program image.
pub fn load_file(vm: &mut Vm, path: &Path) -> Result<(), LoadError> {
    let mut source = FileSource::open(path)?;
    vm.load(&mut source);
    Ok(())
}
