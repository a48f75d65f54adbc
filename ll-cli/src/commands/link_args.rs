use anyhow::{Context, Result};
use clap::Args;
use ll_client::LinkConfig;
use ll_model::PackFormat;
use std::path::PathBuf;

/// Serial link options shared by the streaming commands.
///
/// Values given on the command line override the config file, which
/// overrides the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct LinkArgs {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Serial device path
    #[arg(short, long)]
    pub device: Option<String>,

    /// Baud rate
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Number of LEDs on the strip
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Pack 4 bits per channel instead of 8
    #[arg(long)]
    pub half: bool,

    /// Serial read timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Pause after each frame, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start streaming without waiting for the ready line
    #[arg(long)]
    pub no_wait: bool,
}

impl LinkArgs {
    pub fn resolve(&self) -> Result<LinkConfig> {
        let mut config = match &self.config {
            Some(path) => LinkConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => LinkConfig::default(),
        };

        if let Some(device) = &self.device {
            config.device = device.clone();
        }
        if let Some(baud) = self.baud {
            config.baud_rate = baud;
        }
        if let Some(length) = self.length {
            config.strip_length = length;
        }
        if self.half {
            config.format = PackFormat::Half;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if self.no_wait {
            config.ready_timeout_ms = 0;
        }

        log::debug!("Resolved link config: {config:?}");
        Ok(config)
    }
}
