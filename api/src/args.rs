use clap::{Parser, Subcommand};
use vimcolorschemes_core::domain::common::ListingConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "vcs-explain", version, about = "Inspect vimcolorschemes listing paths")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub listing: ListingArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_LEVEL",
        default_value = "info",
        global = true
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", global = true)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ListingArgs {
    #[arg(long, env = "VCS_PAGE_SIZE", global = true)]
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the page context, title and query fragments for a listing path
    Explain {
        /// Listing path, e.g. `/top/e.neovim/b.dark/p.2`
        path: String,
    },
    /// Percent-encode a value for use in a path segment
    Encode { value: String },
    /// Decode a percent-encoded value
    Decode { value: String },
}

impl From<&Args> for ListingConfig {
    fn from(args: &Args) -> Self {
        ListingConfig::new(args.listing.page_size)
    }
}
