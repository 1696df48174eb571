//! blockdoc - command-line front end for the content normalization library

#![deny(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use blockdoc::{BlockdocConfig, ContentKind};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Main entry point for the blockdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    match cli.command {
        Commands::Detect { input } => {
            let content = read_input(&input)?;
            println!("{}", blockdoc::detect(&content));
        }

        Commands::Render {
            input,
            output,
            standalone,
            no_escape,
            config,
        } => {
            handle_render_command(&input, output.as_deref(), standalone, no_escape, config)?;
        }

        Commands::EditText { input, output } => {
            let content = read_input(&input)?;
            write_output(output.as_deref(), &blockdoc::to_editable_text(&content))?;
        }

        Commands::Commit {
            original,
            edited,
            output,
        } => {
            let original_content = read_input(&original)?;
            let edited_text = read_input(&edited)?;
            let committed = blockdoc::commit_edited_text(&original_content, &edited_text);
            write_output(output.as_deref(), &committed)?;
        }

        Commands::Scan { dir } => {
            handle_scan_command(&dir)?;
        }
    }

    Ok(())
}

/// Handle the render command
fn handle_render_command(
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
    no_escape: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => BlockdocConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BlockdocConfig::default(),
    };

    let mut options = config.render.clone();
    if no_escape {
        options.escape_text = false;
    }

    let content = read_input(input)?;
    log::info!("Rendering {} content", blockdoc::detect(&content));

    let fragment = blockdoc::to_display_html(&content, &options);
    let html = if standalone {
        blockdoc::standalone_page(&fragment, &config.page.title)
    } else {
        fragment
    };

    write_output(output, &html)
}

/// Handle the scan command
fn handle_scan_command(dir: &Path) -> Result<()> {
    let report = blockdoc::scan_directory(dir)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;

    println!("Scanned {} files in {}", report.files, dir.display());
    for kind in [
        ContentKind::StructuredDocument,
        ContentKind::Html,
        ContentKind::PlainText,
        ContentKind::Empty,
    ] {
        println!("  {:<12} {}", kind.as_str(), report.count(kind));
    }

    if !report.block_kinds.is_empty() {
        println!("\nStructured blocks:");
        for (kind, count) in &report.block_kinds {
            println!("  {:<12} {}", kind, count);
        }
    }

    if !report.unreadable.is_empty() {
        println!("\nSkipped {} unreadable files:", report.unreadable.len());
        for path in &report.unreadable {
            println!("  {}", path.display());
        }
    }

    Ok(())
}

/// Read a file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write to a file (creating parent directories), or stdout when no path is given
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write stdout")?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n").context("Failed to write stdout")?;
        }
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}
