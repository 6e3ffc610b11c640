use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

use sssp_engine::graph::generators::{generate_random_graph, write_graph_json, GeneratorConfig};
use sssp_engine::io::{load_graph_from_path, ReportFormat, Reporter, Timed};
use sssp_engine::{compute_distances, Graph};

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-source shortest distances over JSON graph files", long_about = None)]
struct Cli {
    /// Log engine statistics (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute distances from a source node of a graph file
    Run(RunArgs),
    /// Write random graph files, one `graph_{n}_nodes.json` per size
    /// (English form of the `grafo_{n}nodos.json` files of the original generator)
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Graph file: {"node": [[neighbor, weight], ...], ...}
    graph: PathBuf,

    /// Source node
    #[arg(short, long, default_value_t = 0, env = "SSSP_SOURCE")]
    source: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Text printed for unreachable nodes
    #[arg(long, default_value = "unreachable")]
    unreachable_marker: String,

    /// Omit the elapsed time from the report
    #[arg(long)]
    no_timing: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Node counts, one file per size
    #[arg(long, value_delimiter = ',', default_values_t = [10, 100, 1000])]
    sizes: Vec<usize>,

    /// Directory the files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed for reproducible graphs
    #[arg(long)]
    seed: Option<u64>,

    /// Neighbours sampled per node
    #[arg(long, default_value_t = 5)]
    max_neighbors: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Command::Run(args) => run(args),
        Command::Generate(args) => generate(args),
    }
}

fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph_from_path(&args.graph)?;
    let node_count = graph.node_count();

    let run = Timed::measure(|| compute_distances(&graph, args.source, node_count)).transpose()?;

    let reporter = Reporter::new(args.format).with_unreachable_marker(args.unreachable_marker);
    let elapsed = if args.no_timing { None } else { Some(run.elapsed) };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reporter.write_report(&mut out, &run.value, elapsed)?;
    out.flush()?;

    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = GeneratorConfig {
        max_neighbors: args.max_neighbors,
        ..Default::default()
    };

    std::fs::create_dir_all(&args.out_dir)?;
    for n in args.sizes {
        let graph = generate_random_graph(n, &config, &mut rng)?;
        let path = args.out_dir.join(format!("graph_{}_nodes.json", n));
        write_graph_json(&graph, &path)?;
        println!("wrote {} ({} edges)", path.display(), graph.edge_count());
    }

    Ok(())
}
