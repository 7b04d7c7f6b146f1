use std::sync::Arc;

use board_logging::board_info;

use crate::{decode_feed, FeedDocument, FeedError, FetchSettings, Fetcher, ReqwestFetcher};

/// Retrieves the feed and parses it into a [`FeedDocument`].
#[derive(Clone)]
pub struct FeedClient {
    fetcher: Arc<dyn Fetcher>,
}

impl FeedClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub fn with_settings(settings: FetchSettings) -> Self {
        Self::new(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub async fn load(&self, url: &str) -> Result<FeedDocument, FeedError> {
        let body = self.fetcher.fetch(url).await?;
        let decoded = decode_feed(&body.bytes, body.content_type.as_deref())?;
        let document = FeedDocument::parse(&decoded.text)?;
        board_info!(
            "Parsed feed from {} ({} bytes, {}, {} redirects)",
            body.final_url,
            body.bytes.len(),
            decoded.encoding_label,
            body.redirect_count
        );
        Ok(document)
    }
}
