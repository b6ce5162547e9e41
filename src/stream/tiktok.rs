use super::{AdapterConfig, AdapterFuture, Platform, Session, StreamingAdapter};

/// TikTok Live publisher.
///
/// Placeholder: TikTok's OAuth handshake and ingest transport are not wired
/// up yet; this adapter only tracks session state.
#[derive(Debug, Default)]
pub struct TikTokAdapter {
    session: Session,
}

impl StreamingAdapter for TikTokAdapter {
    fn platform(&self) -> Platform {
        Platform::Tiktok
    }

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a> {
        Box::pin(async move {
            // TODO: OAuth token exchange against the TikTok Live API
            tracing::info!(has_client_id = config.client_id.is_some(), "tiktok: initialize");
            Ok(())
        })
    }

    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_key = stream_key.is_some(), "tiktok: start publish");
            self.session.connect(Platform::Tiktok)
        })
    }

    fn stop(&mut self) -> AdapterFuture<'_> {
        Box::pin(async move {
            tracing::info!("tiktok: stop publish");
            self.session.disconnect();
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}
