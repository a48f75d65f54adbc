use clap::Args;
use ll_model::Color;

use crate::commands::link_args::LinkArgs;

#[derive(Debug, Clone, Args)]
pub struct PatternsArgs {
    #[command(flatten)]
    pub link: LinkArgs,

    /// Number of frames to send
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Milliseconds between wave steps
    #[arg(long, default_value_t = 20)]
    pub step_ms: u32,

    /// Color added on top of the wave, as #RRGGBB or r,g,b
    #[arg(long)]
    pub tint: Option<Color>,
}
