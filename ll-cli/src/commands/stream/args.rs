use clap::Args;
use ll_engine::Scheme;

use crate::commands::link_args::LinkArgs;

#[derive(Debug, Clone, Args)]
pub struct StreamArgs {
    #[command(flatten)]
    pub link: LinkArgs,

    /// Number of frames to send
    #[arg(short, long)]
    pub trials: Option<u32>,

    /// How each update produces its front color: gradient, random or rotate
    #[arg(short, long, default_value = "gradient")]
    pub scheme: Scheme,

    /// Start with cyan, magenta and yellow on the first three LEDs
    #[arg(long)]
    pub cym: bool,

    /// Seed for the random scheme (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,
}
