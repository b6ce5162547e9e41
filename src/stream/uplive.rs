use super::{AdapterConfig, AdapterFuture, Platform, Session, StreamingAdapter};

/// Uplive publisher. Placeholder pending the vendor SDK integration.
#[derive(Debug, Default)]
pub struct UpliveAdapter {
    session: Session,
}

impl StreamingAdapter for UpliveAdapter {
    fn platform(&self) -> Platform {
        Platform::Uplive
    }

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_client_id = config.client_id.is_some(), "uplive: initialize");
            Ok(())
        })
    }

    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a> {
        Box::pin(async move {
            tracing::info!(has_key = stream_key.is_some(), "uplive: start publish");
            self.session.connect(Platform::Uplive)
        })
    }

    fn stop(&mut self) -> AdapterFuture<'_> {
        Box::pin(async move {
            tracing::info!("uplive: stop publish");
            self.session.disconnect();
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}
