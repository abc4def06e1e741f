use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use modelgraph::{Converter, ConverterConfig};

/// Convert a Django model graph into a GraphWalker document
#[derive(Parser, Debug)]
#[command(name = "modelgraph")]
#[command(about = "Convert django-extensions graph_models JSON into GraphWalker JSON", long_about = None)]
struct Args {
    /// Path to the graph_models JSON file
    input: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Fail when a relation targets an unknown model
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // stdout carries the document
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("modelgraph v{}", env!("CARGO_PKG_VERSION"));
    info!("Reading {:?}", args.input);

    let doc = modelgraph::io::read_document(&args.input)
        .with_context(|| format!("failed to read model graph from {}", args.input.display()))?;

    let converter = Converter::new(ConverterConfig { strict: args.strict });
    let conversion = converter
        .convert(&doc)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    info!("{}", conversion.report);
    if !conversion.report.is_lossless() {
        warn!(
            "{} relation(s) dropped because their target model is unknown",
            conversion.report.dropped_count()
        );
    }

    let pretty = !args.compact;
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            modelgraph::io::write_document(file, &conversion.document, pretty)?;
            info!("Wrote {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            modelgraph::io::write_document(stdout.lock(), &conversion.document, pretty)?;
        }
    }

    Ok(())
}
