//! libcredit CLI
//!
//! Prints the attribution for a JSON-LD metadata document as text, HTML or
//! JSON.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libcredit::{
    credit_with, load_graph, Catalog, Credit, CreditError, GraphSource, ResolveOptions,
    Translator, DEFAULT_FORMAT_DEPTH, DEFAULT_RESOLVE_DEPTH,
};

#[derive(Parser)]
#[command(name = "libcredit")]
#[command(about = "Derive attribution statements from linked-data metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the credit as plain text
    Text(CreditArgs),
    /// Print the credit as an HTML fragment
    Html(CreditArgs),
    /// Print the resolved credit tree as JSON
    Json(CreditArgs),
}

#[derive(Args)]
struct CreditArgs {
    /// Path or URL of a JSON-LD metadata document
    source: String,

    /// Resource to credit (default: the URL, or the first subject in the document)
    #[arg(long)]
    subject: Option<String>,

    /// Levels of sources to resolve
    #[arg(long, default_value_t = DEFAULT_RESOLVE_DEPTH)]
    depth: usize,

    /// Levels of sources to show
    #[arg(long, default_value_t = DEFAULT_FORMAT_DEPTH)]
    format_depth: usize,

    /// Locale catalog (JSON) for translated output
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn load_catalog(path: &PathBuf) -> Result<Catalog, CreditError> {
    let content = fs::read_to_string(path).map_err(|e| CreditError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Catalog::from_json(&content)
}

/// Resolve the credit named by the arguments
fn resolve_credit(args: &CreditArgs) -> Result<Option<Credit>, CreditError> {
    let source = GraphSource::parse(&args.source);
    let graph = load_graph(&source)?;

    let subject = match (&args.subject, source.document_uri()) {
        (Some(subject), _) => subject.clone(),
        (None, Some(uri)) => uri.to_string(),
        (None, None) => match graph.first_subject() {
            Some(subject) => subject.to_string(),
            None => return Ok(None),
        },
    };
    tracing::info!(subject = %subject, "resolving credit");

    let options = ResolveOptions {
        max_depth: args.depth,
    };
    credit_with(&graph, &subject, &options)
}

fn render(credit: &Credit, args: &CreditArgs, format: OutputFormat) -> Result<String, CreditError> {
    let catalog = args.locale.as_ref().map(load_catalog).transpose()?;
    let l10n = catalog.as_ref().map(|c| c as &dyn Translator);

    Ok(match format {
        OutputFormat::Text => credit.to_text(args.format_depth, l10n),
        OutputFormat::Html => credit.to_html(args.format_depth, l10n),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(credit)?,
        OutputFormat::Json => serde_json::to_string(credit)?,
    })
}

/// Write output to file or stdout
fn write_output(content: &str, output: Option<&PathBuf>) -> Result<(), CreditError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote credit");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn run(args: CreditArgs, format: OutputFormat) -> Result<(), CreditError> {
    match resolve_credit(&args)? {
        Some(credit) => {
            let output = render(&credit, &args, format)?;
            write_output(&output, args.output.as_ref())
        }
        None => {
            eprintln!("No credit information found in {}", args.source);
            Ok(())
        }
    }
}

fn init_tracing() {
    // LIBCREDIT_LOG_FORMAT=json switches to machine-readable logs
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let json = std::env::var("LIBCREDIT_LOG_FORMAT").is_ok_and(|v| v == "json");

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text(args) => run(args, OutputFormat::Text),
        Commands::Html(args) => run(args, OutputFormat::Html),
        Commands::Json(args) => run(args, OutputFormat::Json),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
