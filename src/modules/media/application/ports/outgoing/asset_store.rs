use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetStoreError {
    #[error("asset upload failed: {0}")]
    UploadFailed(String),

    #[error("asset delete failed: {0}")]
    DeleteFailed(String),
}

/// Boundary to the external media host that keeps images and PDFs at
/// durable URLs.
///
/// Upload failures abort the enclosing request. Deletes are best-effort by
/// convention: callers cleaning up after a row removal log and swallow
/// `DeleteFailed`.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores `bytes` under `folder` and returns the durable URL.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<String, AssetStoreError>;

    /// Removes the underlying file addressed by `public_id`.
    async fn delete(&self, public_id: &str) -> Result<(), AssetStoreError>;
}

/// Derives the media host's public id from an asset URL.
///
/// The id is everything after the literal `upload` path segment, minus a
/// leading `v<digits>` version segment, with the file extension stripped:
/// `.../upload/v123/abc/def.png` → `abc/def`. Returns `None` when the URL
/// does not look like a hosted asset, in which case no cleanup is attempted.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let path = url.split('?').next().unwrap_or(url);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let upload_pos = segments.iter().position(|s| *s == "upload")?;
    let mut rest = &segments[upload_pos + 1..];

    if let Some(first) = rest.first() {
        let is_version = first.len() > 1
            && first.starts_with('v')
            && first[1..].chars().all(|c| c.is_ascii_digit());
        if is_version {
            rest = &rest[1..];
        }
    }

    if rest.is_empty() {
        return None;
    }

    let mut joined = rest.join("/");
    if let Some(dot) = joined.rfind('.') {
        // Only strip when the dot belongs to the final segment
        if !joined[dot..].contains('/') {
            joined.truncate(dot);
        }
    }

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_strips_version_and_extension() {
        let url = "https://media.example.com/demo/image/upload/v123/abc/def.png";
        assert_eq!(public_id_from_url(url), Some("abc/def".to_string()));
    }

    #[test]
    fn test_public_id_without_version_segment() {
        let url = "https://media.example.com/demo/image/upload/portfolio/photo.jpg";
        assert_eq!(
            public_id_from_url(url),
            Some("portfolio/photo".to_string())
        );
    }

    #[test]
    fn test_public_id_keeps_nested_folders() {
        let url = "https://media.example.com/upload/v9/a/b/c/resume.pdf";
        assert_eq!(public_id_from_url(url), Some("a/b/c/resume".to_string()));
    }

    #[test]
    fn test_url_without_upload_segment_yields_none() {
        assert_eq!(public_id_from_url("https://example.com/a/b.png"), None);
    }

    #[test]
    fn test_upload_with_nothing_after_yields_none() {
        assert_eq!(
            public_id_from_url("https://media.example.com/image/upload"),
            None
        );
    }

    #[test]
    fn test_query_string_is_ignored() {
        let url = "https://media.example.com/upload/v1/pic.png?w=200";
        assert_eq!(public_id_from_url(url), Some("pic".to_string()));
    }

    #[test]
    fn test_segment_named_like_version_but_not_numeric_is_kept() {
        let url = "https://media.example.com/upload/vault/pic.png";
        assert_eq!(public_id_from_url(url), Some("vault/pic".to_string()));
    }
}
