//! User-facing notices.
//!
//! Fire-and-forget: raising a notice never changes editor state.

use std::sync::Mutex;
use tracing::{info, warn};

use crate::upload::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DepthExceeded { max: usize },
    UploadSucceeded(MediaKind),
    UploadFailed(String),
    UnsupportedFile(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::UploadSucceeded(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::DepthExceeded { max } => write!(f, "Maximum deep level is {}", max),
            Notice::UploadSucceeded(kind) => write!(f, "{} uploaded successfully!", kind),
            Notice::UploadFailed(_) => f.write_str("Error uploading media to server."),
            Notice::UnsupportedFile(_) => f.write_str("Please upload a valid image or video file."),
        }
    }
}

/// Receives notices raised by the editor
pub trait NoticeSink {
    fn notify(&self, notice: Notice);
}

/// Sink that drops everything
#[derive(Debug, Default)]
pub struct Silent;

impl NoticeSink for Silent {
    fn notify(&self, _notice: Notice) {}
}

/// Collects notices in order and logs each one
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Remove and return everything collected so far
    pub fn drain(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NoticeSink for NoticeLog {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            warn!(%notice, detail = ?notice, "notice");
        } else {
            info!(%notice, "notice");
        }

        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
