//! # Media Upload
//!
//! Sends an image or video to the media host and returns the URL it will
//! be served from. One request per call; failures are returned, never
//! retried.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Path appended to the configured host
pub const UPLOAD_PATH: &str = "/api/uploadMedia";

/// Multipart field the media host reads
pub const UPLOAD_FIELD: &str = "media";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported media type: {0}")]
    UnsupportedFile(String),

    #[error("Media host answered {0}")]
    Status(u16),

    #[error("Media host response has no mediaUrl")]
    MissingUrl,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type; only `image/*` and `video/*` are media
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => f.write_str("Image"),
            MediaKind::Video => f.write_str("Video"),
        }
    }
}

/// How the properties panel previews a committed media URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPreview {
    Image,
    Video,
    Unsupported,
}

impl MediaPreview {
    pub fn from_url(url: &str) -> Self {
        let Some((_, ext)) = url.rsplit_once('.') else {
            return MediaPreview::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "gif" | "png" | "svg" | "webp" => MediaPreview::Image,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => MediaPreview::Video,
            _ => MediaPreview::Unsupported,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    media_url: Option<String>,
}

/// Client for the media host's upload endpoint
#[derive(Debug, Clone)]
pub struct MediaUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl MediaUploader {
    pub fn new(api_host: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_host)
    }

    pub fn with_client(client: reqwest::Client, api_host: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", api_host.trim_end_matches('/'), UPLOAD_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one file and return its media URL
    pub async fn upload(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<(MediaKind, String), UploadError> {
        let kind = MediaKind::from_mime(mime)
            .ok_or_else(|| UploadError::UnsupportedFile(mime.to_string()))?;

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "upload refused");
            return Err(UploadError::Status(status.as_u16()));
        }

        let body: UploadResponse = response.json().await?;
        let url = body
            .media_url
            .filter(|url| !url.is_empty())
            .ok_or(UploadError::MissingUrl)?;

        info!(file_name, %url, "uploaded media");
        Ok((kind, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn test_preview_from_url() {
        assert_eq!(MediaPreview::from_url("https://cdn/x/cat.JPG"), MediaPreview::Image);
        assert_eq!(MediaPreview::from_url("clip.webm"), MediaPreview::Video);
        assert_eq!(MediaPreview::from_url("doc.pdf"), MediaPreview::Unsupported);
        assert_eq!(MediaPreview::from_url("cat.png?size=2"), MediaPreview::Unsupported);
        assert_eq!(MediaPreview::from_url(""), MediaPreview::Unsupported);
    }

    #[test]
    fn test_endpoint_joins_host() {
        assert_eq!(
            MediaUploader::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/uploadMedia"
        );
    }

    #[tokio::test]
    async fn test_rejects_non_media_before_sending() {
        // Nothing listens here; the check must fail before any request
        let uploader = MediaUploader::new("http://127.0.0.1:9");

        let result = uploader.upload("notes.txt", "text/plain", b"hi".to_vec()).await;

        assert!(matches!(result, Err(UploadError::UnsupportedFile(mime)) if mime == "text/plain"));
    }
}
