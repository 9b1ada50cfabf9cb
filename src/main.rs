//! svg-canvas CLI
//!
//! Usage:
//!   svg-canvas [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>   Write SVG here instead of stdout
//!   -p, --palette <FILE>  Palette file (TOML) layered over the default colors
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use svg_canvas::{render_scene_with_palette, Palette};

#[derive(Parser)]
#[command(name = "svg-canvas")]
#[command(about = "Render TOML scene descriptions to SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Palette file for named fill colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Load palette
    let mut palette = Palette::default();
    if let Some(path) = &cli.palette {
        match Palette::from_file(path) {
            Ok(p) => palette.merge(p),
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let svg = match render_scene_with_palette(&source, &palette) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let written = match &cli.output {
        Some(path) => fs::write(path, &svg),
        None => io::stdout().lock().write_all(svg.as_bytes()),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
