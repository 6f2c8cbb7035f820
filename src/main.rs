//! Hiccdown CLI
//!
//! Usage:
//!   hiccdown [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>     Settings file (TOML format)
//!   -n, --no-escape         Do not escape text and attribute values
//!   -m, --max-depth <N>     Maximum tree depth (0 disables the limit)
//!   -v, --verbose           Log rendering details to stderr
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hiccdown::{render_json_with_config, RenderError, Settings};

#[derive(Parser)]
#[command(name = "hiccdown", version)]
#[command(about = "Render JSON markup trees to HTML")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not escape text and attribute values
    #[arg(short, long)]
    no_escape: bool,

    /// Maximum tree depth (0 disables the limit)
    #[arg(short, long)]
    max_depth: Option<usize>,

    /// Log rendering details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG, otherwise RUST_LOG or the default WARN level
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut config = settings.render_config();
    if cli.no_escape {
        config = config.with_escape(false);
    }
    if let Some(depth) = cli.max_depth {
        config = config.with_max_depth(depth);
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match render_json_with_config(&source, &config) {
        Ok(html) => {
            println!("{}", html);
        }
        Err(RenderError::Json(e)) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Hiccdown - Render JSON markup trees to HTML

USAGE:
    hiccdown [OPTIONS] [FILE]
    echo '<json>' | hiccdown

OPTIONS:
    -c, --config       Settings file (TOML)
    -n, --no-escape    Do not escape text and attribute values
    -m, --max-depth    Maximum tree depth (0 disables the limit)
    -v, --verbose      Log rendering details to stderr
    -h, --help         Print help

MARKUP TREES:
    ["p", "text"]                       <p>text</p>
    ["p", {{"class": "x"}}, "text"]       <p class="x">text</p>
    [["b", "a"], ["i", "b"]]            <b>a</b><i>b</i>
    ["img", {{"src": "a.png"}}]           <img src="a.png"/>
    {{"data": {{"id": 1}}}}                 data-id="1"
    {{"class": ["a", null, "b"]}}         class="a b"

QUICK START:
    echo '["p", {{"class": "greeting"}}, "Hello"]' | hiccdown"#
    );
}
