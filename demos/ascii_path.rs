//! Find and draw a path on an ASCII map.
//!
//! Run: cargo run --bin ascii-path -- [MAP] [--from X,Y] [--to X,Y]
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the search.

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use tilepath_core::Point;
use tilepath_demos::{AsciiMap, SAMPLE, render_path};
use tilepath_paths::{AstarPath, SearchConfig, path_cost};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map file; the built-in sample is used when omitted
    map: Option<PathBuf>,

    /// Start cell as `col,row` (defaults to the map's `S`)
    #[arg(long, value_parser = parse_point)]
    from: Option<Point>,

    /// Goal cell as `col,row` (defaults to the map's `G`)
    #[arg(long, value_parser = parse_point)]
    to: Option<Point>,

    /// Give up after expanding this many cells
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Give up once this many cells are open at once
    #[arg(long)]
    max_open: Option<usize>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `col,row`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad column `{x}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad row `{y}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let text = match &cli.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let map = AsciiMap::parse(&text)?;

    let from = cli
        .from
        .or(map.start())
        .ok_or("no start: pass --from or put an `S` on the map")?;
    let to = cli
        .to
        .or(map.goal())
        .ok_or("no goal: pass --to or put a `G` on the map")?;

    let config = SearchConfig {
        max_expansions: cli.max_expansions,
        max_open: cli.max_open,
    };
    let mut engine = AstarPath::new(&map.walkability())?.with_config(config);
    log::info!(
        "searching {from} -> {to} on a {}x{} map",
        engine.grid().width(),
        engine.grid().height()
    );

    let path = engine.find_path(from, to)?;
    let stats = engine.last_stats();

    println!("{}", render_path(&map, &path));
    println!();
    if path.is_empty() && from != to {
        println!("no path ({:?})", stats.outcome);
    } else {
        println!("steps: {}  cost: {}", path.len(), path_cost(from, &path));
    }
    println!("expanded: {}  relaxed: {}", stats.expanded, stats.relaxed);
    Ok(())
}
