//! pdfstitch CLI - reading-order text extraction with merged tables

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdfstitch::{
    convert_ascii_tables_to_html, extract_file, extract_to_string, ExtractOptions, JsonFormat,
    PageSelection, RenderOptions, TableFormat,
};

#[derive(Parser)]
#[command(name = "pdfstitch")]
#[command(version)]
#[command(
    about = "Rebuild reading-order text from PDF layout output, merging tables split across pages",
    long_about = None
)]
struct Cli {
    /// Input PDF or layout dump
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output text file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Table rendering mode
    #[arg(long, value_enum, default_value = "html")]
    tables: TableMode,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Keep tables split across pages separate
    #[arg(long)]
    no_merge: bool,

    /// Skip pages whose table detection fails instead of aborting
    #[arg(long)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert ASCII tables in an existing text output to HTML
    Retrofit {
        /// Text file produced with ASCII tables
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output text file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Dump the rebuilt element sequence as JSON
    Json {
        /// Input PDF or layout dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document statistics
    Info {
        /// Input PDF or layout dump
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// HTML tables (default)
    Html,
    /// Fixed-width ASCII tables
    Ascii,
}

impl From<TableMode> for TableFormat {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Html => TableFormat::Html,
            TableMode::Ascii => TableFormat::Ascii,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Retrofit { input, output }) => cmd_retrofit(&input, &output),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => cmd_extract(
                &input,
                &output,
                cli.tables,
                cli.pages.as_deref(),
                cli.no_merge,
                cli.lenient,
            ),
            _ => {
                println!("{}", "Usage: pdfstitch <INPUT> <OUTPUT>".yellow());
                println!("       pdfstitch --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?),
        None => Ok(PageSelection::All),
    }
}

/// Write text to `path`, creating missing parent directories.
fn write_output(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    tables: TableMode,
    pages: Option<&str>,
    no_merge: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ExtractOptions::new()
        .with_pages(parse_pages(pages)?)
        .merge_tables(!no_merge);
    if lenient {
        options = options.lenient();
    }
    let render_options = RenderOptions::new().with_table_format(tables.into());
    log::debug!("Extracting {} with {:?}", input.display(), options);

    // Processing failures are written as the output body
    let text = extract_to_string(input, &options, &render_options);

    write_output(output, &text)?;
    println!(
        "{} Extracted text saved to {}",
        "Success:".green().bold(),
        output.display()
    );

    Ok(())
}

fn cmd_retrofit(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let converted = convert_ascii_tables_to_html(&text);

    write_output(output, &converted)?;
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = extract_file(input, &ExtractOptions::default())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = pdfstitch::render::to_json(&doc, format)?;

    if let Some(path) = output {
        write_output(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so a page with broken table detection still counts
    let format = pdfstitch::detect_format_from_path(input)?;
    let doc = extract_file(input, &ExtractOptions::new().lenient())?;
    let stats = &doc.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), doc.page_count);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Text blocks".bold(), stats.text_block_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Table rows".bold(), stats.row_count);
    println!("{}: {}", "Merged tables".bold(), stats.merged_table_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfstitch".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reading-order text extraction with cross-page table merging");
}
