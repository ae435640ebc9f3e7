//! ticdoc — generate Lua annotation stubs from the TIC-80 wiki.
//!
//! Two modes:
//!
//! - **catalog mode**: `ticdoc -o library` writes one file per API category
//! - **function mode**: `ticdoc circ rectb` prints the listed functions to stdout

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use ticdoc::fetch::DEFAULT_BASE_URL;
use ticdoc::render::{self, Renderer};
use ticdoc::{DirFetcher, Fetch, FunctionRecord, HttpFetcher};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "ticdoc",
    about = "Generate Lua annotation stubs from the TIC-80 wiki API pages"
)]
struct Cli {
    /// Functions to render to stdout. If omitted, every function listed on the
    /// API page is written to the output directory, one file per category.
    functions: Vec<String>,

    /// Output directory for catalog mode
    #[arg(short = 'o', long, default_value = "library")]
    output: PathBuf,

    /// Output format: lua (default), json
    #[arg(short = 'f', long, default_value = "lua")]
    format: String,

    /// Root URL of the raw wiki pages
    #[arg(long, env = "TICDOC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read pages from a local directory of <page>.md files instead of HTTP
    #[arg(long, env = "TICDOC_WIKI_DIR")]
    wiki_dir: Option<PathBuf>,

    /// Skip functions whose page cannot be parsed instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let fetcher: Box<dyn Fetch> = match &cli.wiki_dir {
        Some(dir) => Box::new(DirFetcher::new(dir)),
        None => Box::new(HttpFetcher::new(cli.base_url.as_str())),
    };
    let renderer = render::create_renderer(&cli.format)?;

    if cli.functions.is_empty() {
        return catalog_mode(&cli, fetcher.as_ref(), renderer.as_ref());
    }

    function_mode(&cli, fetcher.as_ref(), renderer.as_ref())
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// function mode: assemble the named functions and print them to stdout.
fn function_mode(cli: &Cli, fetcher: &dyn Fetch, renderer: &dyn Renderer) -> Result<()> {
    let records = assemble_all(cli, fetcher, &cli.functions)?;
    print!("{}", renderer.render("functions", &records)?);
    Ok(())
}

/// catalog mode: list the API page and write one file per category.
fn catalog_mode(cli: &Cli, fetcher: &dyn Fetch, renderer: &dyn Renderer) -> Result<()> {
    let categories = ticdoc::list_function_names(fetcher)
        .context("failed to list functions from the API page")?;

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    for category in &categories {
        let records = assemble_all(cli, fetcher, &category.functions)?;
        let out_path = output_path(&cli.output, &category.name, renderer.file_extension());
        let output = renderer.render(&category.name, &records)?;
        fs::write(&out_path, output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(
            category = %category.name,
            functions = records.len(),
            path = %out_path.display(),
            "wrote category"
        );
    }

    Ok(())
}

/// Assemble every named function; with --keep-going, failures are logged and skipped.
fn assemble_all(cli: &Cli, fetcher: &dyn Fetch, names: &[String]) -> Result<Vec<FunctionRecord>> {
    let mut records = Vec::with_capacity(names.len());
    for name in names {
        match ticdoc::assemble(fetcher, name) {
            Ok(record) => records.push(record),
            Err(e) if cli.keep_going => {
                warn!(function = %name, error = %e, "skipping function");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to assemble function '{}'", name));
            }
        }
    }
    Ok(records)
}

/// "library" + "drawing" + "lua" → "library/drawing.lua"
fn output_path(dir: &Path, category: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", category, ext))
}
