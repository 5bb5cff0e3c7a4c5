//! Merge files of sorted words into one sorted line
//!
//! Each file holds whitespace-separated words. All words from all files are
//! printed in ascending order, separated by spaces, on a single line.
//! Nothing is printed when no files are given or the files hold no words.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use argh::FromArgs;
use log::debug;

use classic_collections::merge::{merge_words, write_joined};

#[derive(FromArgs, Debug)]
/// Merge files of sorted words, keeping the sort order.
struct Arguments {
    /// log at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// files of whitespace-separated words
    #[argh(positional)]
    files: Vec<String>,
}

fn main() -> Result<()> {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:?}");

    let readers = args
        .files
        .iter()
        .map(|path| {
            File::open(path)
                .map(BufReader::new)
                .with_context(|| format!("couldn't open file {path}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let words = merge_words(readers).context("failed to read words")?;
    debug!("merged {} word(s)", words.len());

    let stdout = io::stdout();
    write_joined(&mut stdout.lock(), &words).context("failed to write output")?;
    Ok(())
}
