use super::{AdapterConfig, AdapterFuture, Platform, Session, StreamingAdapter};

/// LiveMe publisher. Placeholder pending the vendor SDK integration.
#[derive(Debug, Default)]
pub struct LiveMeAdapter {
    session: Session,
}

impl StreamingAdapter for LiveMeAdapter {
    fn platform(&self) -> Platform {
        Platform::Liveme
    }

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_client_id = config.client_id.is_some(), "liveme: initialize");
            Ok(())
        })
    }

    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_key = stream_key.is_some(), "liveme: start publish");
            self.session.connect(Platform::Liveme)
        })
    }

    fn stop(&mut self) -> AdapterFuture<'_> {
        Box::pin(async move {
            tracing::info!("liveme: stop publish");
            self.session.disconnect();
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}
