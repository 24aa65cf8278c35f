use std::io::Write;

use anyhow::Context;
use vimcolorschemes_core::domain::{common::ListingConfig, url::URLHelper};

use crate::args::{Args, Command};

pub mod explain;

pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    match &args.command {
        Command::Explain { path } => {
            let config = ListingConfig::from(args);
            let report = explain::explain(path, &config);
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("failed to write explain report")?;
            writeln!(out)?;
        }
        Command::Encode { value } => {
            writeln!(out, "{}", URLHelper::encode(value))?;
        }
        Command::Decode { value } => {
            let decoded = URLHelper::decode(value)
                .with_context(|| format!("cannot decode {value:?}"))?;
            writeln!(out, "{decoded}")?;
        }
    }

    Ok(())
}
