//! Media upload hook
//!
//! The editor hands a local file to a [`MediaUploader`] and stores the
//! returned reference on the node. Only the local-file uploader ships here.

use std::path::Path;

use tracing::{info, warn};

use crate::errors::{FlowError, Result};
use crate::flow::MediaKind;

/// Maximum accepted upload size (10 MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// A stored media asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
    pub size_bytes: u64,
}

pub trait MediaUploader {
    fn upload(&self, file: &Path) -> Result<MediaRef>;
}

/// Infer the media kind from a file extension
pub fn media_kind_for(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => Some(MediaKind::Image),
        "mp4" | "mov" | "webm" | "mkv" | "avi" => Some(MediaKind::Video),
        "mp3" | "wav" | "ogg" | "m4a" | "aac" | "flac" => Some(MediaKind::Audio),
        _ => None,
    }
}

/// References files in place on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalMediaUploader {
    max_bytes: u64,
}

impl LocalMediaUploader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Default for LocalMediaUploader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl MediaUploader for LocalMediaUploader {
    fn upload(&self, file: &Path) -> Result<MediaRef> {
        let metadata = std::fs::metadata(file).map_err(|e| {
            FlowError::not_found(format!("Cannot read '{}': {}", file.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(FlowError::upload(format!(
                "'{}' is not a regular file",
                file.display()
            )));
        }
        if metadata.len() > self.max_bytes {
            warn!(
                "Rejected upload of {} ({} bytes, limit {})",
                file.display(),
                metadata.len(),
                self.max_bytes
            );
            return Err(FlowError::upload(format!(
                "File is {} bytes, the limit is {} bytes",
                metadata.len(),
                self.max_bytes
            )));
        }
        let kind = media_kind_for(file).ok_or_else(|| {
            FlowError::upload(format!("Unsupported media type: '{}'", file.display()))
        })?;

        let absolute = std::fs::canonicalize(file)?;
        info!("Attached media {} ({})", absolute.display(), kind);
        Ok(MediaRef {
            url: format!("file://{}", absolute.display()),
            kind,
            size_bytes: metadata.len(),
        })
    }
}
