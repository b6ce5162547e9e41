//! Live-streaming platform adapters.
//!
//! Every platform implements the same capability set so calling code can
//! start and stop a publish session without knowing which platform is
//! behind it. The current adapters are placeholders: they track connection
//! state and log, but perform no real session setup or media transport.

mod bigo;
mod liveme;
mod tiktok;
mod uplive;
mod youtube;

pub use bigo::BigoAdapter;
pub use liveme::LiveMeAdapter;
pub use tiktok::TikTokAdapter;
pub use uplive::UpliveAdapter;
pub use youtube::YouTubeAdapter;

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Tiktok,
    Bigo,
    Youtube,
    Uplive,
    Liveme,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Spotify,
        Platform::Tiktok,
        Platform::Bigo,
        Platform::Youtube,
        Platform::Uplive,
        Platform::Liveme,
    ];

    /// Lowercase token, as used in config tables and on the command line.
    pub fn token(&self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Tiktok => "tiktok",
            Platform::Bigo => "bigo",
            Platform::Youtube => "youtube",
            Platform::Uplive => "uplive",
            Platform::Liveme => "liveme",
        }
    }

    /// Human-readable platform name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Tiktok => "TikTok",
            Platform::Bigo => "BIGO",
            Platform::Youtube => "YouTube Live",
            Platform::Uplive => "Uplive",
            Platform::Liveme => "LiveMe",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("no streaming adapter for {0}")]
    Unsupported(Platform),

    #[error("already publishing to {0}; stop first")]
    AlreadyConnected(Platform),
}

/// Connection settings for a platform adapter, read from the
/// `[stream.<platform>]` table of the config file. Recognized fields will
/// grow per platform as real integrations land; these cover the common
/// credential shapes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub endpoint: Option<String>,
}

pub type AdapterFuture<'a> =
    Pin<Box<dyn Future<Output = Result<(), AdapterError>> + Send + 'a>>;

/// Capability set every platform integration must satisfy.
///
/// Lifecycle: `initialize` prepares credentials/session material and leaves
/// the connection state untouched; `start` moves disconnected to connected;
/// `stop` moves back and is a no-op when already disconnected. Failures
/// during any of the three surface as the returned error, not as a modeled
/// state.
pub trait StreamingAdapter: Send + fmt::Debug {
    fn platform(&self) -> Platform;

    fn initialize<'a>(&'a mut self, config: &'a AdapterConfig) -> AdapterFuture<'a>;

    /// Begin publishing. Calling `start` while already connected is an
    /// `AlreadyConnected` error and leaves the session up.
    fn start<'a>(&'a mut self, stream_key: Option<&'a str>) -> AdapterFuture<'a>;

    fn stop(&mut self) -> AdapterFuture<'_>;

    fn is_connected(&self) -> bool;
}

/// Connect/disconnect bookkeeping shared by the stub adapters.
#[derive(Debug, Default)]
pub(crate) struct Session {
    connected: bool,
}

impl Session {
    pub(crate) fn connect(&mut self, platform: Platform) -> Result<(), AdapterError> {
        if self.connected {
            return Err(AdapterError::AlreadyConnected(platform));
        }
        self.connected = true;
        Ok(())
    }

    pub(crate) fn disconnect(&mut self) {
        self.connected = false;
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Look up the adapter for a platform. Spotify appears in the selection UI
/// but has no publish integration, so it is rejected here.
pub fn build_adapter(platform: Platform) -> Result<Box<dyn StreamingAdapter>, AdapterError> {
    match platform {
        Platform::Spotify => Err(AdapterError::Unsupported(platform)),
        Platform::Tiktok => Ok(Box::new(TikTokAdapter::default())),
        Platform::Bigo => Ok(Box::new(BigoAdapter::default())),
        Platform::Youtube => Ok(Box::new(YouTubeAdapter::default())),
        Platform::Uplive => Ok(Box::new(UpliveAdapter::default())),
        Platform::Liveme => Ok(Box::new(LiveMeAdapter::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publishable() -> impl Iterator<Item = Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| !matches!(p, Platform::Spotify))
    }

    #[test]
    fn spotify_has_no_adapter() {
        let err = build_adapter(Platform::Spotify).unwrap_err();
        assert!(matches!(err, AdapterError::Unsupported(Platform::Spotify)));
    }

    #[test]
    fn registry_reports_the_requested_platform() {
        for platform in publishable() {
            let adapter = build_adapter(platform).unwrap();
            assert_eq!(adapter.platform(), platform);
        }
    }

    #[test]
    fn adapters_start_disconnected() {
        for platform in publishable() {
            let adapter = build_adapter(platform).unwrap();
            assert!(!adapter.is_connected(), "{platform} starts connected");
        }
    }

    #[tokio::test]
    async fn start_and_stop_track_connection_state() {
        for platform in publishable() {
            let mut adapter = build_adapter(platform).unwrap();

            adapter.initialize(&AdapterConfig::default()).await.unwrap();
            assert!(!adapter.is_connected(), "{platform}: initialize connected");

            adapter.start(Some("key123")).await.unwrap();
            assert!(adapter.is_connected(), "{platform}: start did not connect");

            adapter.stop().await.unwrap();
            assert!(!adapter.is_connected(), "{platform}: stop did not disconnect");
        }
    }

    #[tokio::test]
    async fn stop_is_idempotent_when_disconnected() {
        for platform in publishable() {
            let mut adapter = build_adapter(platform).unwrap();
            adapter.stop().await.unwrap();
            assert!(!adapter.is_connected());
        }
    }

    #[tokio::test]
    async fn start_without_key_connects() {
        let mut adapter = build_adapter(Platform::Youtube).unwrap();
        adapter.start(None).await.unwrap();
        assert!(adapter.is_connected());
    }

    #[tokio::test]
    async fn second_start_is_rejected_and_stays_connected() {
        let mut adapter = build_adapter(Platform::Tiktok).unwrap();
        adapter.start(Some("key123")).await.unwrap();

        let err = adapter.start(Some("key123")).await.unwrap_err();
        assert!(matches!(err, AdapterError::AlreadyConnected(Platform::Tiktok)));
        assert!(adapter.is_connected());
    }

    #[test]
    fn tokens_round_trip_through_value_enum() {
        use clap::ValueEnum;
        for platform in Platform::ALL {
            let parsed = Platform::from_str(platform.token(), false).unwrap();
            assert_eq!(parsed, platform);
        }
    }
}
