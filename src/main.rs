mod app;
mod cli;

#[cfg(feature = "tui")]
mod tui;

use anyhow::Context;
use clap::Parser;
use genie::client::DEFAULT_MODEL;
use genie::{config, paths};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = cli::Args::parse();

    // Resolve and create dirs early.
    let config_dir = paths::config_dir()?;

    let cfg = config::Config::load_optional(config_dir.join("config.toml"))?;
    tracing::debug!(?config_dir, ?cfg, "resolved config");

    match args.cmd {
        Some(cli::Command::Platforms) => {
            app::cmd_platforms();
            return Ok(());
        }
        Some(cli::Command::Stream { platform, stream_key }) => {
            return app::cmd_stream(cfg.as_ref(), platform, stream_key).await;
        }
        #[cfg(feature = "tui")]
        Some(cli::Command::Tui) => {
            return tui::run_tui(cfg.as_ref()).await;
        }
        None => {}
    }

    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt provided. Try: genie \"Hello\" or `genie platforms`");
    }

    let model = args
        .model
        .clone()
        .or_else(|| cfg.as_ref().and_then(|c| c.model.clone()))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let client = app::build_client(&http, cfg.as_ref())?;

    let reply = client.chat(&prompt, &model).await?;
    println!("{reply}");

    Ok(())
}
