//! Report which pairs join previously separate components
//!
//! Reads a node count and then one `p q` pair per line from stdin. Prints
//! the node count, every pair whose nodes were not yet connected, and the
//! final number of components.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use argh::FromArgs;
use log::{debug, info};

use classic_collections::union_find::{read_connections, QuickFind, UnionFind};

#[derive(FromArgs, Debug)]
/// Connect node pairs read from stdin with quick-find.
struct Arguments {
    /// log at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,
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

    let conns = read_connections(io::stdin().lock()).context("failed to read pairs")?;
    let mut uf = QuickFind::new(conns.nodes).context("invalid node count")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "Node count: {}", conns.nodes)?;

    let mut redundant = 0usize;
    for (p, q) in conns.pairs {
        if uf.connected(p, q)? {
            redundant += 1;
            continue;
        }
        uf.union(p, q)?;
        writeln!(out, "Pair: {p} {q}")?;
    }
    debug!("{redundant} pair(s) were already connected");

    writeln!(out, "Components: {}", uf.count())?;
    out.flush()?;
    info!("{} node(s) in {} component(s)", uf.len(), uf.count());
    Ok(())
}
