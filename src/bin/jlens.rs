use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use jsonlens::{FormatOptions, Formatter};

/// Render a JSON or JSONP payload as a syntax-highlighted HTML document.
///
/// jlens reads a payload from stdin or a file and writes a self-contained
/// HTML page. Invalid payloads still produce a page, carrying the parse
/// error and the original text.
#[derive(Parser, Debug)]
#[command(name = "jlens")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file. If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Source url of the payload, used as the document title.
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Stylesheet href referenced from the document head.
    #[arg(long, default_value = "json.css")]
    stylesheet: String,

    /// Script src referenced from the document head.
    #[arg(long, default_value = "live.js")]
    script: String,

    /// Treat the payload as plain JSON; skip JSONP callback detection.
    #[arg(long)]
    no_jsonp: bool,

    /// Maximum nesting depth rendered before reporting an error document.
    #[arg(long, default_value = "512")]
    max_depth: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jlens: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
        None => {
            if io::stdin().is_terminal() {
                return Err("no input: pipe a payload to stdin or pass FILE".into());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Configure formatter
    let mut formatter = Formatter::new();
    configure_options(&mut formatter.options, &args);

    // Format
    let output = formatter.format(&input, args.url.as_deref());

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}

fn configure_options(opts: &mut FormatOptions, args: &Args) {
    opts.stylesheet_href = args.stylesheet.clone();
    opts.script_src = args.script.clone();
    opts.detect_jsonp = !args.no_jsonp;
    opts.max_render_depth = args.max_depth;
}
