// ABOUTME: CLI for cleaning rich-text editor markup with rte-cleanup.
// ABOUTME: Reads an HTML fragment from a file or stdin, normalizes it and prints the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rte_cleanup::{
    convert_divs_to_paragraphs, load_builtin_registry, Cleaner, CleanupOptions, CommandRegistry,
    Document, NodeId, TagPolicy, SELECTION_MARKER_CLASS,
};

/// Normalize HTML produced by a rich-text editor.
#[derive(Parser, Debug)]
#[command(name = "rte-cleanup")]
#[command(about = "Remove redundant markup left behind by rich-text editing", long_about = None)]
struct Args {
    /// HTML fragment to clean. Reads stdin when absent or "-".
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Turn divs at the top of each editing root into paragraphs first
    #[arg(long = "divs-to-paragraphs")]
    divs_to_paragraphs: bool,

    /// JSON tag policy replacing the builtin one
    #[arg(long = "policy")]
    policy: Option<PathBuf>,

    /// JSON command list replacing the builtin registry
    #[arg(long = "commands")]
    commands: Option<PathBuf>,

    /// Class that marks selection-boundary spans
    #[arg(long = "marker-class", default_value = SELECTION_MARKER_CLASS)]
    marker_class: String,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cleaner = build_cleaner(&args)?;
    let html = read_input(args.input.as_deref())?;

    let start = Instant::now();
    let mut doc = Document::parse_fragment_with(&html, &args.marker_class);
    let editables = editing_roots(&doc);
    debug!("found {} editing root(s)", editables.len());

    if editables.is_empty() {
        if args.divs_to_paragraphs {
            let top_level = doc.top_level();
            convert_divs_to_paragraphs(&mut doc, &top_level);
        }
        let root = doc.root();
        cleaner.cleanup(&mut doc, &[root], &CleanupOptions::default());
    } else {
        for editable in editables {
            if args.divs_to_paragraphs {
                let children = doc.children(editable);
                convert_divs_to_paragraphs(&mut doc, &children);
            }
            cleaner.cleanup(&mut doc, &[editable], &CleanupOptions::default());
        }
    }
    let elapsed = start.elapsed();

    let output = doc.to_html();
    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", output),
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_cleaner(args: &Args) -> Result<Cleaner> {
    let policy = match &args.policy {
        Some(path) => TagPolicy::from_json(&read_file(path)?)
            .with_context(|| format!("invalid tag policy in {}", path.display()))?,
        None => TagPolicy::builtin(),
    };
    let registry = match &args.commands {
        Some(path) => CommandRegistry::from_json(&read_file(path)?)
            .with_context(|| format!("invalid command list in {}", path.display()))?,
        None => load_builtin_registry(),
    };
    Ok(Cleaner::builder().policy(policy).registry(registry).build())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Outermost editable elements, in document order.
fn editing_roots(doc: &Document) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&id| is_editable(doc, id))
        .filter(|&id| !doc.ancestors(id).into_iter().any(|a| is_editable(doc, a)))
        .collect()
}

fn is_editable(doc: &Document, id: NodeId) -> bool {
    doc.element(id).is_some_and(|el| el.is_editable())
}
