use crate::stream::{AdapterConfig, Platform};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Default model (optional)
    pub model: Option<String>,

    /// Base address of the chat API; defaults to the Poe endpoint.
    pub api_base: Option<String>,

    /// Per-platform adapter settings, e.g. `[stream.tiktok]`.
    #[serde(default)]
    pub stream: BTreeMap<Platform, AdapterConfig>,
}

impl Config {
    /// Load config if the file exists, otherwise return Ok(None).
    pub fn load_optional(path: impl AsRef<Path>) -> anyhow::Result<Option<Self>> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e))
                    .with_context(|| format!("failed to read config: {}", path.display()))
            }
        };

        let s = String::from_utf8(bytes).context("config is not valid UTF-8")?;
        let cfg: Config = toml::from_str(&s)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))?;
        Ok(Some(cfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_optional(dir.path().join("config.toml")).unwrap();
        assert!(cfg.is_none());
    }

    #[test]
    fn parses_model_api_base_and_stream_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            concat!(
                "model = \"Cease-And-Desist-pro\"\n",
                "api_base = \"https://api.poe.com/v1\"\n",
                "\n",
                "[stream.tiktok]\n",
                "client_id = \"abc\"\n",
                "\n",
                "[stream.youtube]\n",
                "endpoint = \"rtmp://a.rtmp.youtube.com/live2\"\n",
            ),
        )
        .unwrap();

        let cfg = Config::load_optional(&path).unwrap().unwrap();
        assert_eq!(cfg.model.as_deref(), Some("Cease-And-Desist-pro"));
        assert_eq!(cfg.api_base.as_deref(), Some("https://api.poe.com/v1"));

        let tiktok = cfg.stream.get(&Platform::Tiktok).unwrap();
        assert_eq!(tiktok.client_id.as_deref(), Some("abc"));
        assert!(tiktok.endpoint.is_none());

        let youtube = cfg.stream.get(&Platform::Youtube).unwrap();
        assert_eq!(
            youtube.endpoint.as_deref(),
            Some("rtmp://a.rtmp.youtube.com/live2")
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = ").unwrap();
        assert!(Config::load_optional(&path).is_err());
    }
}
