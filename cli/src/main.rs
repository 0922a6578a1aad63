//! Cinegraph CLI — build, list and search relationship graphs from a movie dataset

use cinegraph::{
    AggregatorConfig, AppConfig, CollaborationGraph, MovieRecord, Namespacing, PairTally,
    Relation, VisNetwork,
};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cinegraph", version, about = "Movie relationship graphs")]
struct Cli {
    /// YAML config file
    #[arg(long, global = true, env = "CINEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Movie dataset (JSON); overrides the config file
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Relationship to graph
    #[arg(long, global = true)]
    relation: Option<RelationArg>,

    /// Minimum number of shared movies for an edge
    #[arg(long, global = true)]
    min_count: Option<u32>,

    /// Prefix ids with their role so one name can be two nodes
    #[arg(long, global = true)]
    namespaced: bool,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RelationArg {
    CoStar,
    DirectorCast,
    ProducerMovie,
}

impl From<RelationArg> for Relation {
    fn from(arg: RelationArg) -> Self {
        match arg {
            RelationArg::CoStar => Relation::CoStar,
            RelationArg::DirectorCast => Relation::DirectorCast,
            RelationArg::ProducerMovie => Relation::ProducerMovie,
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List edges that meet the threshold
    Edges,
    /// List connected entities with their aggregate weight
    Nodes,
    /// Show the collaborators of an entity
    Neighbors {
        /// Name (or role-prefixed id) to search for
        name: String,
    },
    /// Print the vis-network payload
    Render {
        /// Highlight this entity's neighborhood
        #[arg(long)]
        highlight: Option<String>,
    },
    /// Graph and pair-count statistics
    Stats,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut app = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(dataset) = &cli.dataset {
        app.dataset = Some(dataset.clone());
    }
    if let Some(relation) = cli.relation {
        app.relation = relation.into();
    }
    if let Some(min_count) = cli.min_count {
        app.threshold = Some(min_count);
    }
    if cli.namespaced {
        app.namespacing = Namespacing::PrefixedByRole;
    }

    let movies = cinegraph::load_records(app.dataset()?)?;
    let config = app.aggregator_config();
    let tally = PairTally::build(&movies, &config);
    let graph = tally.graph(config.threshold)?;

    match &cli.command {
        Commands::Edges => run_edges(&graph, &cli.format),
        Commands::Nodes => run_nodes(&graph, &cli.format),
        Commands::Neighbors { name } => run_neighbors(&graph, name, &cli.format),
        Commands::Render { highlight } => run_render(&graph, &app, highlight.as_deref()),
        Commands::Stats => run_stats(&graph, &tally, &movies, &config, &cli.format),
    }
}

fn print_rows(format: &OutputFormat, header: &[&str], rows: Vec<Vec<String>>) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let objects: Vec<serde_json::Map<String, serde_json::Value>> = rows
                .iter()
                .map(|row| {
                    header
                        .iter()
                        .zip(row.iter())
                        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                        .collect()
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&objects)?);
        }
        OutputFormat::Csv => {
            println!("{}", header.join(","));
            for row in &rows {
                let cells: Vec<String> = row.iter().map(|v| format_csv_value(v)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(header);
            let count = rows.len();
            for row in rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", count);
        }
    }
    Ok(())
}

fn run_edges(graph: &CollaborationGraph, format: &OutputFormat) -> CliResult<()> {
    let rows = graph
        .edges()
        .iter()
        .map(|e| vec![e.a.to_string(), e.b.to_string(), e.weight.to_string()])
        .collect();
    print_rows(format, &["from", "to", "movies"], rows)
}

fn run_nodes(graph: &CollaborationGraph, format: &OutputFormat) -> CliResult<()> {
    let rows = graph
        .nodes()
        .map(|n| {
            vec![
                n.id.to_string(),
                n.role.to_string(),
                n.aggregate_weight.to_string(),
                format!("{:.2}", n.display_weight()),
            ]
        })
        .collect();
    print_rows(format, &["id", "role", "audience", "audience_10m"], rows)
}

fn run_neighbors(graph: &CollaborationGraph, name: &str, format: &OutputFormat) -> CliResult<()> {
    let mut rows = Vec::new();
    for center in graph.resolve(name) {
        for edge in graph.neighborhood(&center).edges {
            if let Some(other) = edge.other(&center) {
                rows.push(vec![center.to_string(), other.to_string(), edge.weight.to_string()]);
            }
        }
    }
    print_rows(format, &["entity", "neighbor", "movies"], rows)
}

fn run_render(graph: &CollaborationGraph, app: &AppConfig, highlight: Option<&str>) -> CliResult<()> {
    let mut network = VisNetwork::from_graph(graph, &app.render);
    if let Some(name) = highlight {
        if !network.highlight(graph, name) {
            eprintln!("No entity named {:?} in the graph", name);
        }
    }
    println!("{}", network.to_json()?);
    Ok(())
}

/// Tally and snapshot figures, in display order
fn stats_fields(
    graph: &CollaborationGraph,
    tally: &PairTally,
    movies: &[MovieRecord],
    config: &AggregatorConfig,
) -> Vec<(&'static str, serde_json::Value)> {
    let stats = graph.statistics();
    vec![
        ("relation", config.relation.to_string().into()),
        ("threshold", graph.threshold().into()),
        ("movies", movies.len().into()),
        ("entities", tally.entity_count().into()),
        ("distinct_pairs", tally.pair_total().into()),
        ("max_pair_count", tally.max_pair_count().into()),
        ("node_count", stats.node_count.into()),
        ("edge_count", stats.edge_count.into()),
        ("lead_count", stats.lead_count.into()),
        ("max_edge_weight", stats.max_edge_weight.into()),
        ("total_aggregate_weight", stats.total_aggregate_weight.into()),
    ]
}

fn run_stats(
    graph: &CollaborationGraph,
    tally: &PairTally,
    movies: &[MovieRecord],
    config: &AggregatorConfig,
    format: &OutputFormat,
) -> CliResult<()> {
    let fields = stats_fields(graph, tally, movies, config);

    if let OutputFormat::Json = format {
        let report: serde_json::Map<String, serde_json::Value> =
            fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows = fields
        .into_iter()
        .map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            vec![k.to_string(), value]
        })
        .collect();
    print_rows(format, &["field", "value"], rows)
}

fn format_csv_value(v: &str) -> String {
    if v.contains(',') || v.contains('"') || v.contains('\n') {
        format!("\"{}\"", v.replace('"', "\"\""))
    } else {
        v.to_string()
    }
}
