//! File lifecycle events delivered by the host editor.
//!
//! Hosts translate whatever their native event bus produces (registration
//! callbacks, message loops, watcher threads) into [`FileEvent`] values and
//! hand them to a [`FileEventListener`](crate::FileEventListener). The engine
//! only ever reads the uri; everything else about the host's file object stays
//! on the host side.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The lifecycle moment an event describes.
pub enum FileEventKind {
    /// The file was opened in the editor.
    Open,
    /// The file was saved.
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A handle to a file known to the host editor.
pub struct FileHandle {
    /// Host-side identifier for the file, e.g. `file:///home/me/script.py`.
    pub uri: String,
}

impl FileHandle {
    /// Create a handle for `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single file lifecycle event.
pub struct FileEvent {
    /// Which lifecycle moment fired.
    pub kind: FileEventKind,
    /// The file the event is about.
    pub file: FileHandle,
}

impl FileEvent {
    /// Convenience constructor for an [`FileEventKind::Open`] event.
    pub fn open(uri: impl Into<String>) -> Self {
        Self {
            kind: FileEventKind::Open,
            file: FileHandle::new(uri),
        }
    }

    /// Convenience constructor for a [`FileEventKind::Save`] event.
    pub fn save(uri: impl Into<String>) -> Self {
        Self {
            kind: FileEventKind::Save,
            file: FileHandle::new(uri),
        }
    }
}
