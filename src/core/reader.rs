use crate::adapters::{FileSource, HttpSource};
use crate::core::decode::DecodeOptions;
use crate::core::feed::decode_with;
use crate::domain::ports::FeedSource;
use crate::domain::Feed;
use crate::utils::error::Result;
use std::path::Path;
use std::time::Instant;

/// 從來源取得文件後解碼
pub struct FeedReader<S: FeedSource> {
    source: S,
    options: DecodeOptions,
}

impl<S: FeedSource> FeedReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, DecodeOptions::default())
    }

    pub fn with_options(source: S, options: DecodeOptions) -> Self {
        Self { source, options }
    }

    pub async fn read(&self) -> Result<Feed> {
        let started = Instant::now();
        tracing::info!("Fetching feed from {}", self.source.describe());

        let bytes = self.source.fetch().await?;
        tracing::debug!("Fetched {} bytes", bytes.len());

        let feed = decode_with(&bytes, &self.options)?;
        tracing::info!(
            "Decoded '{}' ({} publications, {} groups) in {:?}",
            feed.metadata.title,
            feed.publications.len(),
            feed.groups.len(),
            started.elapsed()
        );
        Ok(feed)
    }
}

pub async fn parse_file(path: impl AsRef<Path>) -> Result<Feed> {
    FeedReader::new(FileSource::new(path.as_ref())).read().await
}

pub async fn parse_url(url: &str) -> Result<Feed> {
    FeedReader::new(HttpSource::new(url)?).read().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FeedError;
    use async_trait::async_trait;

    struct StaticSource(&'static [u8]);

    #[async_trait]
    impl FeedSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            Ok(self.0.to_vec())
        }

        fn describe(&self) -> String {
            "static bytes".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl FeedSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            Err(FeedError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )))
        }

        fn describe(&self) -> String {
            "nowhere".to_string()
        }
    }

    #[tokio::test]
    async fn test_read_decodes_fetched_bytes() {
        let reader = FeedReader::new(StaticSource(
            br#"{"metadata": {"title": "Static"}, "links": [{"href": "/self", "rel": "self"}]}"#,
        ));
        let feed = reader.read().await.unwrap();
        assert_eq!(feed.metadata.title, "Static");
        assert_eq!(feed.links.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_before_decode() {
        let result = FeedReader::new(FailingSource).read().await;
        assert!(matches!(result, Err(FeedError::IoError(_))));
    }

    #[tokio::test]
    async fn test_decode_error_is_reported() {
        let result = FeedReader::new(StaticSource(b"[]")).read().await;
        assert!(matches!(result, Err(FeedError::NotAnObjectError { .. })));
    }
}
