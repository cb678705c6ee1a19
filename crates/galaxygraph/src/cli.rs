//! Command-line front end.
//!
//! [`Cli`] is the argument set of the `galaxygraph` binary; [`run`] executes
//! it and returns everything the binary prints to stdout.

use crate::config::QueryConfig;
use crate::error::{GraphError, Result};
use crate::export::DotOptions;
use crate::loader::GraphDescription;
use crate::query::Query;
use crate::render::{render_listing, render_path, PathReport};
use crate::sample::SAMPLE_SCRIPT;
use crate::statement::Script;
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Shortest paths between nodes of a partitioned road graph
#[derive(Debug, Parser)]
#[command(name = "galaxygraph")]
#[command(version)]
#[command(about = "Shortest paths between nodes of a partitioned road graph")]
pub struct Cli {
    /// FIND statements or bare `a.a->b.j` pairs; defaults to the script's own FIND lines
    pub queries: Vec<String>,

    /// Statement script to load instead of the bundled sample
    #[arg(short, long, conflicts_with = "graph")]
    pub script: Option<PathBuf>,

    /// JSON graph description to load instead of a script
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// JSON query configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the galaxy/node listing
    #[arg(long)]
    pub list: bool,

    /// Print one JSON report per query
    #[arg(long)]
    pub json: bool,

    /// Print the graph as Graphviz DOT, highlighting the last path
    #[arg(long)]
    pub dot: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Load the world, answer the queries, and render the output.
///
/// Without query arguments the loaded script's FIND statements run; a JSON
/// graph description has none.
///
/// # Errors
///
/// Any load, parse, resolution or rendering error stops the run.
pub fn run(cli: &Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => QueryConfig::from_path(path)?,
        None => QueryConfig::default(),
    };
    if cli.list {
        config.list_graph = true;
    }

    let (loaded, script_queries) = match &cli.graph {
        Some(path) => {
            info!("Loading graph description from {}", path.display());
            (GraphDescription::from_path(path)?.load()?, Vec::new())
        }
        None => {
            let text = match &cli.script {
                Some(path) => {
                    info!("Loading script from {}", path.display());
                    std::fs::read_to_string(path).map_err(|source| GraphError::Io {
                        path: path.clone(),
                        source,
                    })?
                }
                None => SAMPLE_SCRIPT.to_string(),
            };
            let script = Script::parse(&text)?;
            (script.description.load()?, script.queries)
        }
    };

    let queries = if cli.queries.is_empty() {
        script_queries
    } else {
        cli.queries
            .iter()
            .map(|text| Query::parse(text))
            .collect::<Result<Vec<_>>>()?
    };

    let graph = &loaded.store;
    let mut output = String::new();
    if config.list_graph {
        output.push_str(&render_listing(graph, &config)?);
    }

    let mut last_path = Vec::new();
    for query in &queries {
        let outcome = query.execute(graph, &config)?;
        let line = if cli.json {
            PathReport::new(graph, &outcome, &config)?.to_json()?
        } else {
            render_path(graph, &outcome.result, &config)?
        };
        output.push_str(&line);
        output.push('\n');
        last_path = outcome.result.path;
    }

    if cli.dot {
        output.push_str(&graph.export_dot_styled(DotOptions::default().with_highlight(last_path))?);
    }

    Ok(output)
}
