//! Wattle CLI - flexbox layout from JSON fixtures
//!
//! Usage:
//!   wattle layout <file>                 Lay out a fixture and print the box tree
//!   wattle layout <file> --json          Print the computed layout as JSON
//!   wattle layout <file> --width 320     Override the container width
//!   wattle check <file-or-dir>...        Compare fixtures with their expected results
//!
//! Examples:
//!   wattle layout tests/fixtures/nested.json
//!   wattle -vv check crates/wattle-flex/tests/fixtures

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use owo_colors::OwoColorize;
use wattle_common::warning;
use wattle_flex::{Fixture, FlexDirection, Layout};

/// Tolerance used when comparing computed and expected sizes.
const EPSILON: f64 = 1e-6;

#[derive(Parser)]
#[command(name = "wattle", version, about = "Deterministic CSS flexbox layout")]
struct Cli {
    /// Increase log verbosity over `RUST_LOG` (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out a fixture and print the resulting boxes.
    Layout {
        /// Fixture file (`container`, `items`, optional `result`).
        file: PathBuf,
        /// Override the container width.
        #[arg(long)]
        width: Option<f64>,
        /// Override the container height.
        #[arg(long)]
        height: Option<f64>,
        /// Override the container flex-direction.
        #[arg(long)]
        direction: Option<FlexDirection>,
        /// Print JSON instead of an indented tree.
        #[arg(long)]
        json: bool,
    },
    /// Run fixtures and compare against their expected results.
    Check {
        /// Fixture files, or directories of `*.json` fixtures.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match cli.verbose {
        0 => {}
        1 => {
            let _ = logger.filter_level(LevelFilter::Debug);
        }
        _ => {
            let _ = logger.filter_level(LevelFilter::Trace);
        }
    }
    logger.init();

    let outcome = match cli.command {
        Command::Layout {
            file,
            width,
            height,
            direction,
            json,
        } => run_layout(&file, width, height, direction, json).map(|()| true),
        Command::Check { paths } => run_check(&paths),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run_layout(
    file: &Path,
    width: Option<f64>,
    height: Option<f64>,
    direction: Option<FlexDirection>,
    json: bool,
) -> Result<()> {
    let fixture =
        Fixture::load(file).with_context(|| format!("loading {}", file.display()))?;
    let (mut tree, root) = fixture.build()?;
    tree.calculate_layout(root, width, height, direction)?;
    let layout = tree.get_all_computed_layout(root, &[])?;

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_tree(&layout, "root", 0);
    }
    Ok(())
}

fn print_tree(layout: &Layout, label: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}{} @ ({}, {}) {}x{}",
        label.cyan(),
        layout.left,
        layout.top,
        layout.width,
        layout.height
    );
    for (index, child) in layout.children.iter().flatten().enumerate() {
        print_tree(child, &format!("[{index}]"), depth + 1);
    }
}

/// Expand directories to their `*.json` files, sorted by name.
fn collect_fixtures(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path).with_context(|| format!("reading {}", path.display()))? {
                let entry = entry?.path();
                if entry.extension().is_some_and(|ext| ext == "json") {
                    entries.push(entry);
                }
            }
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn run_check(paths: &[PathBuf]) -> Result<bool> {
    let files = collect_fixtures(paths)?;
    let mut failed = 0_usize;
    for file in &files {
        // Each fixture reports its own quirks.
        warning::clear_warnings();
        let result = Fixture::load(file).and_then(|fixture| fixture.check(EPSILON));
        match result {
            Ok(()) => println!("{} {}", "PASS".green().bold(), file.display()),
            Err(err) => {
                failed += 1;
                println!("{} {}: {err}", "FAIL".red().bold(), file.display());
            }
        }
    }

    let passed = files.len() - failed;
    println!();
    if failed == 0 {
        println!("{}", format!("{passed} passed").green());
    } else {
        println!("{}", format!("{passed} passed, {failed} failed").red());
    }
    log::debug!("checked {} fixtures", files.len());
    Ok(failed == 0)
}
