//! Chunk-oriented storage consumed by the file-serving and upload handlers.
//!
//! The server core never touches the filesystem directly; it goes through
//! the [`Storage`] capability, which hands out byte-oriented read and write
//! handles for names produced by `http::url::file_from_path`. The binary
//! wires in [`FsStorage`]; tests can substitute their own implementation.

use std::io;

pub mod fs;

pub use fs::FsStorage;

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::http::body::{BodyEvent, UploadSink};
use crate::http::request::RequestContext;
use crate::http::url::file_from_path;

/// A stored file open for reading.
pub trait FileRead: Send {
    /// Reads up to `buf.len()` bytes. Returns 0 at end of file.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// A stored file open for writing.
pub trait FileWrite: Send {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

/// The storage collaborator: opens files by the upper-cased names derived
/// from request paths.
pub trait Storage: Send + Sync {
    fn open_read(&self, name: &str) -> io::Result<Box<dyn FileRead>>;
    fn open_write(&self, name: &str) -> io::Result<Box<dyn FileWrite>>;
}

/// Upload sink that stores the received body under the filename derived
/// from the request path.
///
/// On `Start` the target file is opened; every `Chunk` is appended to it;
/// `End` releases the handle. A failure to open or write drops the handle
/// and the remaining chunks with it; the transfer protocol has no error
/// reply once the body is being drained.
pub struct StorageSink {
    storage: Arc<dyn Storage>,
    active: Mutex<Option<Box<dyn FileWrite>>>,
}

impl StorageSink {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            active: Mutex::new(None),
        }
    }
}

impl UploadSink for StorageSink {
    fn on_event(&self, req: &RequestContext, event: BodyEvent<'_>) {
        let Ok(mut active) = self.active.lock() else {
            return;
        };
        match event {
            BodyEvent::Start { declared_len } => {
                let Some(name) = file_from_path(req.path()) else {
                    warn!("upload path {} has no file name", req.path());
                    return;
                };
                match self.storage.open_write(&name) {
                    Ok(file) => {
                        tracing::debug!("upload of {} bytes to {}", declared_len, name);
                        *active = Some(file);
                    }
                    Err(e) => warn!("cannot open {} for upload: {}", name, e),
                }
            }
            BodyEvent::Chunk(data) => {
                if let Some(file) = active.as_mut() {
                    if let Err(e) = file.write_chunk(data) {
                        warn!("upload write failed: {}", e);
                        *active = None;
                    }
                }
            }
            BodyEvent::End => {
                *active = None;
            }
        }
    }
}
