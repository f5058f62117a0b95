use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use kadence_styles::{parse_document, BlockDefaults, CompilerConfig, StyleCompiler};

/// Compile a block-parser JSON document into the frontend stylesheet.
#[derive(Parser, Debug)]
#[command(name = "kadence-styles", version, about)]
struct Cli {
    /// Block document to read; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// JSON file of per-block-type attribute defaults
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Print bare CSS instead of a <style> element
    #[arg(long, conflicts_with = "fingerprint")]
    raw: bool,

    /// Print the SHA-256 of the CSS instead of the CSS
    #[arg(long)]
    fingerprint: bool,

    /// Upper bound of the mobile media query, in px
    #[arg(long, default_value_t = 767)]
    breakpoint: u32,

    /// `id` of the emitted style element
    #[arg(long, default_value = "kadence-blocks-frontend")]
    style_id: String,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();

    let text = read_input(cli.input.as_ref())?;
    let mut blocks = parse_document(&text).context("input is not a block document")?;

    if let Some(path) = &cli.defaults {
        let defaults = BlockDefaults::from_file(path)
            .with_context(|| format!("failed to load defaults from {}", path.display()))?;
        defaults.apply_all(&mut blocks);
    }

    let compiler = StyleCompiler::new(CompilerConfig {
        mobile_breakpoint_px: cli.breakpoint,
        style_element_id: cli.style_id,
        ..Default::default()
    });

    let out = if cli.fingerprint {
        compiler.compile_document(&blocks).fingerprint()
    } else if cli.raw {
        compiler.compile_document(&blocks).to_string()
    } else {
        compiler.render_style_element(&blocks)
    };

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    writeln!(lock, "{}", out)?;
    lock.flush()?;
    Ok(())
}
