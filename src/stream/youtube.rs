use super::{AdapterConfig, AdapterFuture, Platform, Session, StreamingAdapter};

/// YouTube Live publisher.
///
/// Placeholder: a real integration would create a broadcast via the YouTube
/// Live Streaming API and push RTMP to the returned ingest address.
#[derive(Debug, Default)]
pub struct YouTubeAdapter {
    session: Session,
}

impl StreamingAdapter for YouTubeAdapter {
    fn platform(&self) -> Platform {
        Platform::Youtube
    }

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_client_id = config.client_id.is_some(), "youtube: initialize");
            Ok(())
        })
    }

    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_key = stream_key.is_some(), "youtube: start publish");
            self.session.connect(Platform::Youtube)
        })
    }

    fn stop(&mut self) -> AdapterFuture<'_> {
        Box::pin(async move {
            tracing::info!("youtube: stop publish");
            self.session.disconnect();
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}
