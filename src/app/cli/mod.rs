//! CLI Adapter for the `run-compare` and `check-config` binaries.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::app::api::{self, CheckOptions, CompareOptions};
use crate::domain::AppError;
use crate::domain::config::paths;

#[derive(Args, Debug)]
struct LocationArgs {
    /// Comparator working directory and base for relative paths [default: current directory]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Configuration file [default: <root>/config.json]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl LocationArgs {
    /// Root as an absolute path; relative flags resolve against the current directory.
    fn resolve_root(&self) -> Result<PathBuf, AppError> {
        match &self.root {
            Some(root) => Ok(std::path::absolute(root)?),
            None => Ok(std::env::current_dir()?),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "run-compare")]
#[command(version)]
#[command(
    about = "Clear old difference images, run the image comparator, and report new differences",
    long_about = None
)]
struct CompareCli {
    #[command(flatten)]
    location: LocationArgs,
    /// Comparator script [default: <root>/scripts/node/compare.js]
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,
    /// Program that executes the comparator script
    #[arg(long, value_name = "PROGRAM", default_value = paths::DEFAULT_RUNTIME)]
    runtime: String,
}

#[derive(Parser, Debug)]
#[command(name = "check-config")]
#[command(version)]
#[command(about = "Validate config.json and show its key settings", long_about = None)]
struct CheckCli {
    #[command(flatten)]
    location: LocationArgs,
}

/// Entry point for `run-compare`.
pub fn run_compare() {
    let cli = CompareCli::parse();

    println!("🖼️  Image comparison runner");
    println!("{}", "=".repeat(50));

    let result = compare_options(cli).and_then(|options| api::run_compare(&options));

    println!();
    println!("{}", "=".repeat(50));
    finish(result.map(|_| ()), "🎉 Task complete!", "💥 Task failed!");
}

/// Entry point for `check-config`.
pub fn check_config() {
    let cli = CheckCli::parse();

    println!("🧪 Configuration check");
    println!("{}", "=".repeat(50));

    let result = check_options(cli).and_then(|options| api::check_config(&options));

    println!();
    finish(
        result.map(|_| ()),
        "🎉 Configuration check passed!",
        "💥 Configuration check failed!",
    );
}

fn compare_options(cli: CompareCli) -> Result<CompareOptions, AppError> {
    let root = cli.location.resolve_root()?;
    let mut options = CompareOptions::for_root(root);
    if let Some(config) = cli.location.config {
        options.config_path = std::path::absolute(config)?;
    }
    if let Some(script) = cli.script {
        options.script = std::path::absolute(script)?;
    }
    options.runtime = cli.runtime;
    Ok(options)
}

fn check_options(cli: CheckCli) -> Result<CheckOptions, AppError> {
    let root = cli.location.resolve_root()?;
    let mut options = CheckOptions::for_root(root);
    if let Some(config) = cli.location.config {
        options.config_path = std::path::absolute(config)?;
    }
    Ok(options)
}

fn finish(result: Result<(), AppError>, success: &str, failure: &str) {
    match result {
        Ok(()) => println!("{}", success),
        Err(e) => {
            eprintln!("❌ {}", e);
            println!("{}", failure);
            std::process::exit(e.exit_code());
        }
    }
}
