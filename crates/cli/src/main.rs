//! CLI tool for compiling slide markup into rich-text edit operations.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use slidemark_core::{read_markup, MarkupProcessor, OffsetUnit};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Compile `**bold**` / `•` bullet markup into slide text edit operations.
#[derive(Parser, Debug)]
#[command(name = "slidemark")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markup file(s); reads stdin when omitted or given as `-`
    input: Vec<PathBuf>,

    /// Object id of the text container the operations target
    #[arg(long, default_value = "body")]
    object_id: String,

    /// What to print for each input
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ops)]
    format: OutputFormat,

    /// Count offsets in UTF-16 code units instead of code points
    #[arg(long)]
    utf16: bool,

    /// Index at which the text is inserted
    #[arg(long, default_value = "0")]
    insertion_index: usize,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Edit operations as JSON
    Ops,
    /// Parsed segments as JSON
    Segments,
    /// Google Slides batchUpdate body as JSON
    Requests,
    /// Markup stripped to plain text
    Clean,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let processor = build_processor(&args);

    let inputs = if args.input.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.input.clone()
    };

    for input_path in &inputs {
        log::debug!("Processing: {}", input_path.display());

        match process_input(input_path, &args, &processor) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

fn build_processor(args: &Args) -> MarkupProcessor {
    let unit = if args.utf16 {
        OffsetUnit::Utf16
    } else {
        OffsetUnit::CodePoints
    };

    MarkupProcessor::new()
        .with_offset_unit(unit)
        .with_insertion_index(args.insertion_index)
}

/// Read and render a single input.
fn process_input(input_path: &Path, args: &Args, processor: &MarkupProcessor) -> Result<String> {
    let raw = read_input(input_path)?;
    log::debug!("  Read {} bytes", raw.len());

    render(&raw, args, processor)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        return read_markup(io::stdin().lock()).context("Failed to read stdin");
    }

    let file = File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    read_markup(file).with_context(|| format!("Failed to read {}", path.display()))
}

/// Render markup in the requested output format.
fn render(raw: &str, args: &Args, processor: &MarkupProcessor) -> Result<String> {
    let output = match args.format {
        OutputFormat::Ops => to_json(&processor.render(raw, &args.object_id), args.pretty)?,
        OutputFormat::Segments => to_json(&processor.parse_markup(raw), args.pretty)?,
        OutputFormat::Requests => {
            let batch = slidemark_slides::render_markup_with(processor, raw, &args.object_id)?;
            if args.pretty {
                batch.to_json_pretty()?
            } else {
                batch.to_json()?
            }
        }
        OutputFormat::Clean => processor.clean_text(raw),
    };

    Ok(output)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    json.context("Failed to encode JSON")
}
