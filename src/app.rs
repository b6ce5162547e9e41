use anyhow::Context;
use genie::client::PoeClient;
use genie::config::Config;
use genie::stream::{self, Platform};

/// Build the chat client: explicit env credential, base address from the
/// config file when present.
pub fn build_client(http: &reqwest::Client, cfg: Option<&Config>) -> anyhow::Result<PoeClient> {
    let mut client =
        PoeClient::new(http.clone(), None).context("failed to construct chat client")?;

    if let Some(base) = cfg.and_then(|c| c.api_base.as_deref()) {
        client = client
            .with_api_base(base)
            .with_context(|| format!("bad api_base in config: {base}"))?;
    }

    Ok(client)
}

pub fn cmd_platforms() {
    for platform in Platform::ALL {
        let status = match stream::build_adapter(platform) {
            Ok(_) => "adapter available",
            Err(_) => "no adapter",
        };
        println!("{:<10} {} ({status})", platform.token(), platform.label());
    }
}

pub async fn cmd_stream(
    cfg: Option<&Config>,
    platform: Platform,
    stream_key: Option<String>,
) -> anyhow::Result<()> {
    let mut adapter = stream::build_adapter(platform)?;

    let adapter_cfg = cfg
        .and_then(|c| c.stream.get(&platform).cloned())
        .unwrap_or_default();

    adapter.initialize(&adapter_cfg).await?;
    adapter.start(stream_key.as_deref()).await?;
    println!("Publishing to {}. Press Ctrl-C to stop.", platform.label());

    tokio::signal::ctrl_c()
        .await
        .context("failed to wait for Ctrl-C")?;

    adapter.stop().await?;
    println!("Stopped.");
    Ok(())
}
