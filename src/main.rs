//! gantt-svg CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::Level;

use gantt_svg::parsers::dates::parse_absolute_date;
use gantt_svg::{RenderConfig, SvgRenderer, render_dsl_with};

/// Gantt schedule DSL to SVG chart output.
#[derive(Parser, Debug)]
#[command(
    name = "gantt-svg",
    version = env!("GANTT_SVG_VERSION"),
    about = "Gantt schedule DSL to SVG chart output"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Canvas width in pixels
    #[arg(short = 'w', long = "width", default_value = "800")]
    width: f64,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Pin "today" (e.g. 2024-01-15) instead of reading the clock
    #[arg(long = "today")]
    today: Option<String>,

    /// Omit the embedded default stylesheet
    #[arg(long = "no-style")]
    no_style: bool,

    /// Log parse and layout details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let mut config = RenderConfig::new().with_width(cli.width);
    if let Some(ref today) = cli.today {
        match parse_absolute_date(today) {
            Ok(now) => config = config.with_now(now),
            Err(e) => {
                eprintln!("error: --today: {}", e);
                process::exit(1);
            }
        }
    }

    let renderer = if cli.no_style {
        SvgRenderer::without_style()
    } else {
        SvgRenderer::new()
    };

    let rendered = match render_dsl_with(&text, &config, &renderer) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
