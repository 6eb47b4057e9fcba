use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prim_mst::{mst_weight_from, read_edge_list, Graph, MstWeight};

// must not parse as an integer, weights can be negative
const DISCONNECTED: &str = "IMPOSSIBLE";

/// Reads `N M` and `M` lines of `u v w`, prints the minimum spanning tree weight.
#[derive(Parser, Debug)]
#[command(name = "main", version)]
struct Cli {
    /// Read the graph from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Vertex (1-based) the tree is grown from
    #[arg(short, long, default_value_t = 1)]
    start: usize,

    /// Printed instead of a weight when no spanning tree exists
    #[arg(short, long, default_value = DISCONNECTED, allow_hyphen_values = true)]
    disconnected: String,

    /// Log filter for stderr (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = vec![];
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render(result: MstWeight, disconnected: &str) -> String {
    match result {
        MstWeight::Connected(w) => w.to_string(),
        MstWeight::Disconnected => disconnected.to_owned(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let input = read_input(cli.input.as_deref())?;
    let list = read_edge_list(&input).context("malformed graph description")?;
    let graph = Graph::from_edges(list.num_vertices, &list.edges).context("invalid graph")?;
    let result = mst_weight_from(&graph, cli.start)?;
    info!(?result, "computed");

    let mut output = BufWriter::new(std::io::stdout().lock());
    writeln!(output, "{}", render(result, &cli.disconnected))?;
    output.flush()?;
    Ok(())
}
