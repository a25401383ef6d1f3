//! The `retheme` command line interface.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use retheme_tokens::{ConversionOptions, Normalizer, Renderer};

use crate::loader::{load_config, ConfigFormat};

/// Convert Tailwind-style config files to CSS-first design tokens.
#[derive(Debug, Parser)]
#[command(name = "retheme", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a config file to CSS tokens
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Input config file (JSON or YAML)
    input: PathBuf,

    /// Output CSS file
    #[arg(short, long, default_value = "tokens.css")]
    output: PathBuf,

    /// Generate dark mode CSS variables
    #[arg(long)]
    dark: bool,

    /// Split output into multiple files
    #[arg(long)]
    split: bool,

    /// Minify CSS output
    #[arg(long)]
    minify: bool,

    /// Write a Markdown conversion report
    #[arg(long)]
    report: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Convert(args) => convert(&args),
        }
    }
}

fn convert(args: &ConvertArgs) -> Result<()> {
    println!(
        "{}",
        style("Converting design token config to CSS tokens...").blue()
    );

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading config from {}", args.input.display()))?;
    let config = load_config(&text, ConfigFormat::from_path(&args.input))
        .with_context(|| format!("parsing config from {}", args.input.display()))?;

    let outcome = Normalizer::new().parse(&config)?;
    let renderer = Renderer::new();
    let result = renderer.generate(
        &outcome.theme,
        &ConversionOptions {
            dark: args.dark,
            split: args.split,
            minify: args.minify,
        },
    );

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    write_artifact(&args.output, &result.css)?;

    if args.split {
        if let Some(dark_css) = &result.dark_css {
            write_artifact(&sibling_path(&args.output, "-dark"), dark_css)?;
        }
        if let Some(animations_css) = &result.animations_css {
            write_artifact(&sibling_path(&args.output, "-animations"), animations_css)?;
        }
    }

    if args.report {
        let summary = renderer.generate_report(&outcome.theme)?;
        let report_path = report_path(&args.output);
        fs::write(&report_path, summary)
            .with_context(|| format!("writing report to {}", report_path.display()))?;
        println!(
            "{}",
            style(format!("Generated report: {}", report_path.display())).green()
        );
    }

    let report = outcome.report.merge(result.report);
    println!("\n{}", style("Conversion summary:").blue());
    for (label, count) in [
        ("Colors", report.converted.colors.len()),
        ("Fonts", report.converted.fonts.len()),
        ("Font Sizes", report.converted.font_sizes.len()),
        ("Spacing", report.converted.spacing.len()),
        ("Border Radius", report.converted.border_radius.len()),
        ("Keyframes", report.converted.keyframes.len()),
        ("Animations", report.converted.animations.len()),
    ] {
        println!("{}", style(format!("  {}: {}", label, count)).dim());
    }

    if !report.warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow());
        for warning in &report.warnings {
            println!("{}", style(format!("  - {}", warning)).yellow());
        }
    }

    let skipped = report.skipped_count();
    if skipped > 0 {
        println!(
            "\n{}",
            style(format!("Skipped {} entries (see report for details)", skipped)).yellow()
        );
    }

    println!("\n{}", style("Conversion completed.").green());
    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    println!("{}", style(format!("Generated: {}", path.display())).green());
    Ok(())
}

/// Builds a sibling artifact path by suffixing the output stem:
/// `out/tokens.css` with `-dark` becomes `out/tokens-dark.css`.
fn sibling_path(output: &Path, suffix: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tokens");
    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("css");
    output.with_file_name(format!("{}{}.{}", stem, suffix, ext))
}

fn report_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tokens");
    output.with_file_name(format!("{}-report.md", stem))
}
