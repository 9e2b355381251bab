//! Error types for folder resolution and window presentation.
//!
//! None of these are fatal to the process: the resolver logs per-file
//! failures and skips the file, and `main` logs whatever reaches it.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The target folder does not exist.
    #[error("Folder not found: {0:?}")]
    FolderNotFound(PathBuf),

    /// The folder exists but could not be listed.
    #[error("Failed to read folder {path:?}: {source}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The asset chosen for a file does not exist on disk.
    #[error("No icon asset for {file}: {icon:?} does not exist")]
    IconAssetMissing { file: String, icon: PathBuf },

    /// The asset exists but could not be decoded.
    #[error("Failed to load icon for {file}: {source}")]
    ImageDecode {
        file: String,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Window event loop failed: {0}")]
    EventLoop(#[from] eframe::Error),
}
