//! PDF Tools CLI
//!
//! Runs one PDF operation per invocation, chosen with `-f`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use pdftools::dispatch::{Function, Outcome, Request};

/// Single-dash multi-letter flags and the long options they stand for
///
/// clap only takes one character after a single dash, so these are rewritten
/// before parsing.
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-fp", "--folderpath"),
    ("-ifp", "--inputfilepath"),
    ("-sp", "--savepath"),
];

/// Options whose next token is their value, in either spelling
const VALUE_FLAGS: [&str; 14] = [
    "-f", "--functions",
    "-fp", "--folderpath",
    "-ifp", "--inputfilepath",
    "-sp", "--savepath",
    "-d", "--degrees",
    "-r", "--replacement",
    "-p", "--pagenumber",
];

/// PDF Tools - combine, convert, rotate and replace pages of PDF files
#[derive(Parser, Debug)]
#[command(name = "pdftools")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Combine every PDF in a folder into <folder>/output.pdf
    pdftools -f combinepdf -fp ./handouts

    # Extract text into ./out/lecture.docx
    pdftools -f pdftodocx -ifp lecture.pdf -sp ./out

    # Rotate every page by 90 degrees clockwise into ./out/scan.pdf
    pdftools -f rotatepdf -ifp scan.pdf -sp ./out -d 90

    # Replace page 3 with the first page of fix.pdf into ./out/deck_new.pdf
    pdftools -f pagereplace -ifp deck.pdf -r fix.pdf -sp ./out -p 3")]
struct Cli {
    /// Operation to run
    #[arg(short = 'f', long = "functions", value_enum)]
    function: Function,

    /// Folder containing the PDFs to combine (-fp)
    #[arg(long = "folderpath", value_name = "FOLDER")]
    folder: Option<PathBuf>,

    /// Input PDF file (-ifp)
    #[arg(long = "inputfilepath", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory to write the output into (-sp)
    #[arg(long = "savepath", value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Clockwise rotation in degrees, a multiple of 90
    #[arg(short = 'd', long = "degrees", allow_hyphen_values = true)]
    degrees: Option<i64>,

    /// PDF whose first page replaces the target page
    #[arg(short = 'r', long = "replacement", value_name = "FILE")]
    replacement: Option<PathBuf>,

    /// 1-based number of the page to replace
    #[arg(short = 'p', long = "pagenumber", allow_hyphen_values = true)]
    page_number: Option<i64>,
}

impl Cli {
    fn request(&self) -> Request {
        Request {
            folder: self.folder.clone(),
            input: self.input.clone(),
            save_dir: self.save_dir.clone(),
            degrees: self.degrees,
            replacement: self.replacement.clone(),
            page_number: self.page_number,
        }
    }
}

/// Rewrite `-fp`, `-ifp` and `-sp` to their long forms
///
/// Only tokens in flag position are touched: a value such as `-r -sp`
/// passes through unchanged, as does everything after `--`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut is_value = false;
    let mut positional_only = false;

    for arg in args {
        let arg = if is_value || positional_only {
            arg
        } else {
            LEGACY_FLAGS
                .iter()
                .find(|(short, _)| arg == *short)
                .map(|(_, long)| OsString::from(long))
                .unwrap_or(arg)
        };

        positional_only = positional_only || (!is_value && arg == "--");
        is_value = !is_value && !positional_only && VALUE_FLAGS.iter().any(|flag| arg == *flag);
        normalized.push(arg);
    }

    normalized
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    cli.function
        .run(&cli.request())
        .with_context(|| format!("{} failed", cli.function.name()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    match run(&cli) {
        Ok(outcome) => println!("{}", outcome.message()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
