use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::storage::{FileRead, FileWrite, Storage};

/// Filesystem-backed storage rooted at a single directory.
///
/// File names are used exactly as given (the processor hands them over
/// already upper-cased), so stored files are expected to carry upper-case
/// names. Names containing path separators or parent components are
/// rejected rather than resolved.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid file name",
            ));
        }
        Ok(self.root.join(name))
    }
}

impl Storage for FsStorage {
    fn open_read(&self, name: &str) -> io::Result<Box<dyn FileRead>> {
        let path = self.resolve(name)?;
        Ok(Box::new(File::open(path)?))
    }

    fn open_write(&self, name: &str) -> io::Result<Box<dyn FileWrite>> {
        let path = self.resolve(name)?;
        std::fs::create_dir_all(&self.root)?;
        Ok(Box::new(File::create(path)?))
    }
}

impl FileRead for File {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }
}

impl FileWrite for File {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk)
    }
}
