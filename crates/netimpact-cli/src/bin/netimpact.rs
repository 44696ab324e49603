//! netimpact CLI - network analysis from the command line
//!
//! Usage:
//!   netimpact apl <file>                           # Total path length
//!   netimpact apl --disable "a b" <file>           # ... after removing nodes
//!   netimpact apl --enable "a b c" <file>          # ... of an induced subgraph
//!   netimpact asp <file>                           # Average shortest path
//!   netimpact dist <file>                          # Degree distribution
//!   netimpact -w 4 impact <node_count> <trials> <file>  # Removal impact trials

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use netimpact_core::io::{parse_fantasi_nodes, split_node_list};
use netimpact_core::{
    average_shortest_path, degree_distribution, run_impact_trials, total_path_length, Graph,
    GraphFile, ImpactConfig, NetError, SamplingMethod,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netimpact")]
#[command(version)]
#[command(about = "netimpact - path length and node removal impact of undirected networks")]
#[command(
    long_about = "Computes total path length, average shortest path, degree distribution and \
                  Monte-Carlo node removal impact for graphs stored as GraphML, JSON or edge lists"
)]
struct Cli {
    /// Log graph traversal information to stderr
    #[arg(short, long, global = true)]
    info: bool,

    /// Number of parallel workers for impact trials
    #[arg(short, long, default_value_t = 1, value_name = "N", global = true)]
    workers: usize,

    /// Use pseudo-random (cyclic shift) node sampling
    #[arg(short, long, visible_alias = "psuedo", global = true)]
    pseudo: bool,

    /// Node lists are zero-based FANTASI indices
    #[arg(short, long, global = true)]
    fantasi: bool,

    /// Base seed for reproducible impact trials
    #[arg(short, long, value_name = "SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sum of shortest path lengths over all ordered node pairs
    Apl {
        /// Keep only these nodes (space or comma separated)
        #[arg(long, value_name = "LIST", conflicts_with = "disable")]
        enable: Option<String>,

        /// Remove these nodes and print the surviving edges
        #[arg(long, value_name = "LIST")]
        disable: Option<String>,

        /// Input graph (.graphml, .json or edge list)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Average shortest path of a connected graph
    Asp {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Degree distribution as "degree, count" lines
    Dist {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Impact of removing NODE_COUNT random nodes, over TRIALS trials
    Impact {
        #[arg(value_name = "NODE_COUNT")]
        node_count: usize,

        #[arg(value_name = "TRIALS")]
        trials: usize,

        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.info);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn init_logging(info: bool) {
    let default = if info {
        "warn,netimpact=info,netimpact_core=trace"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), NetError> {
    match &cli.command {
        Command::Apl {
            enable,
            disable,
            file,
        } => {
            let mut graph = load(file)?;
            if let Some(list) = enable {
                let nodes = node_list(list, cli.fantasi)?;
                graph = graph.enable(&nodes)?;
            }
            if let Some(list) = disable {
                let nodes = node_list(list, cli.fantasi)?;
                graph = graph.disable(&nodes)?;
                for (a, b) in graph.edge_list() {
                    println!("{} -> {}", a, b);
                }
            }
            println!("{}", total_path_length(&graph));
        }
        Command::Asp { file } => {
            let graph = load(file)?;
            println!("{}", average_shortest_path(&graph)?);
        }
        Command::Dist { file } => {
            let graph = load(file)?;
            for (degree, count) in degree_distribution(&graph).dense() {
                println!("{}, {}", degree, count);
            }
        }
        Command::Impact {
            node_count,
            trials,
            file,
        } => {
            let method = if cli.pseudo {
                SamplingMethod::Pseudo
            } else {
                SamplingMethod::Random
            };
            let mut config = ImpactConfig::new(*node_count, *trials)
                .with_workers(cli.workers)
                .with_method(method);
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }

            let scores = run_impact_trials(&GraphFile::new(file), &config)?;
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
    }
    Ok(())
}

fn load(file: &Path) -> Result<Graph, NetError> {
    let graph = GraphFile::new(file).read()?;
    tracing::info!(
        "loaded '{}': {} nodes, {} edges",
        file.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn node_list(list: &str, fantasi: bool) -> Result<Vec<String>, NetError> {
    let tokens = split_node_list(list);
    if fantasi {
        parse_fantasi_nodes(&tokens)
    } else {
        Ok(tokens.into_iter().map(str::to_string).collect())
    }
}
