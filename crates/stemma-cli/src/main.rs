use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use stemma::{FamilyData, FamilyGraph, FamilyLayout, LayoutOptions, NodeIx, NodeKind};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
    Layout(stemma::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Config(msg) => write!(f, "config error: {msg}"),
            CliError::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<stemma::Error> for CliError {
    fn from(value: stemma::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Check,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    node_width: Option<f64>,
    node_height: Option<f64>,
    pretty: bool,
    verbose: bool,
}

#[derive(Serialize)]
struct NodeOut<'a> {
    id: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    generation: i32,
    x: f64,
    y: f64,
    age: Option<f64>,
    partners: Vec<&'a str>,
    siblings: Vec<&'a str>,
    sibling_count: usize,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    generations: Vec<Vec<&'a str>>,
    nodes: Vec<NodeOut<'a>>,
}

#[derive(Serialize)]
struct CheckOut {
    nodes: usize,
    links: usize,
    members: usize,
    generations: usize,
}

fn usage() -> &'static str {
    "stemma-cli\n\
\n\
USAGE:\n\
  stemma-cli [layout] [--pretty] [--config <path>] [--node-width <w>] [--node-height <h>] [--verbose] [<path>|-]\n\
  stemma-cli check [--config <path>] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is either {\"members\": {...}, \"links\": [[source, target], ...]} or a bare link array.\n\
  - --config reads layout options as JSON; --node-width/--node-height override it.\n\
  - Logging goes to stderr, filtered by STEMMA_LOG (default: warn); --verbose enables debug.\n\
"
}

fn is_positive(n: f64) -> bool {
    n.is_finite() && n > 0.0
}

fn parse_number(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    let n = value.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !is_positive(n) {
        return Err(CliError::Usage(usage()));
    }
    Ok(n)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--node-width" => args.node_width = Some(parse_number(it.next())?),
            "--node-height" => args.node_height = Some(parse_number(it.next())?),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("STEMMA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

/// Accepts a full family document or a bare `[[source, target], ...]` link array.
fn parse_family(text: &str) -> Result<FamilyData, CliError> {
    let value: Value = serde_json::from_str(text)?;
    let data = if value.is_array() {
        FamilyData {
            links: serde_json::from_value(value)?,
            ..Default::default()
        }
    } else {
        serde_json::from_value(value)?
    };
    Ok(data)
}

fn load_options(args: &Args) -> Result<LayoutOptions, CliError> {
    let mut options = match args.config.as_deref() {
        None => LayoutOptions::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let options: LayoutOptions = serde_json::from_str(&text)
                .map_err(|err| CliError::Config(format!("{path}: {err}")))?;
            let size = options.node_size;
            if !(is_positive(size.x) && is_positive(size.y)) {
                return Err(CliError::Config(format!(
                    "{path}: node_size must be positive, got {} x {}",
                    size.x, size.y
                )));
            }
            options
        }
    };
    if let Some(width) = args.node_width {
        options.node_size.x = width;
    }
    if let Some(height) = args.node_height {
        options.node_size.y = height;
    }
    tracing::debug!(?options, "layout options");
    Ok(options)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn ids<'a>(graph: &'a FamilyGraph, ixs: &[NodeIx]) -> Vec<&'a str> {
    ixs.iter().map(|&ix| graph.id(ix)).collect()
}

fn layout_out<'a>(graph: &'a FamilyGraph, result: &FamilyLayout<'a>) -> LayoutOut<'a> {
    let generations = result
        .generations()
        .values()
        .map(|bucket| ids(graph, bucket))
        .collect();
    let nodes = graph
        .node_ixs()
        .map(|ix| {
            let (kind, name) = match graph.kind(ix) {
                NodeKind::Member(record) => ("member", Some(record.name())),
                NodeKind::Family => ("family", None),
            };
            let position = result.position(ix);
            NodeOut {
                id: graph.id(ix),
                kind,
                name,
                generation: result.generation(ix),
                x: position.x,
                y: position.y,
                age: result.age(ix),
                partners: ids(graph, &result.partners(ix)),
                siblings: ids(graph, result.siblings(ix)),
                sibling_count: result.sibling_count(ix),
            }
        })
        .collect();

    LayoutOut { generations, nodes }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let data = parse_family(&text)?;
    let options = load_options(&args)?;
    let graph = FamilyGraph::from_data(&data)?;

    match args.command {
        Command::Layout => {
            let result = stemma::layout(&graph, &options)?;
            write_json(&layout_out(&graph, &result), args.pretty)
        }
        Command::Check => {
            stemma::validate::check(&graph, &options)?;
            let generations = stemma::generation::assign_generations(graph.relations())?;
            let out = CheckOut {
                nodes: graph.node_count(),
                links: graph.links().len(),
                members: graph.node_ixs().filter(|&ix| graph.is_member(ix)).count(),
                generations: generations.len(),
            };
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Layout(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
