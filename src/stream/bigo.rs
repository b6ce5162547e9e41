use super::{AdapterConfig, AdapterFuture, Platform, Session, StreamingAdapter};

/// BIGO Live publisher. Placeholder pending the vendor SDK integration.
#[derive(Debug, Default)]
pub struct BigoAdapter {
    session: Session,
}

impl StreamingAdapter for BigoAdapter {
    fn platform(&self) -> Platform {
        Platform::Bigo
    }

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_client_id = config.client_id.is_some(), "bigo: initialize");
            Ok(())
        })
    }

    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_key = stream_key.is_some(), "bigo: start publish");
            self.session.connect(Platform::Bigo)
        })
    }

    fn stop(&mut self) -> AdapterFuture<'_> {
        Box::pin(async move {
            tracing::info!("bigo: stop publish");
            self.session.disconnect();
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}
