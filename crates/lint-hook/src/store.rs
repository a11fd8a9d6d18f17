//! Filesystem-backed file access.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::host::FileStore;
use crate::uri;

/// [`FileStore`] over the local filesystem.
///
/// Accepts both `file://` URIs and bare paths, so terminal hosts can feed
/// command-line arguments straight through without converting first.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Create a store. Stateless; every read goes to the filesystem.
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn read_to_string(&self, uri: &str) -> io::Result<String> {
        let path = uri::uri_to_path(uri).unwrap_or_else(|| PathBuf::from(uri));
        fs::read_to_string(path)
    }
}
