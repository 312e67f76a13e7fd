// polyhash command-line interface
// Argument parsing, input selection, and digest output formatting

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::*;

use polyhash::catalog;
use polyhash::engine::{HashEngine, HashResult};
use polyhash::error::HashError;
use polyhash::progress::ProgressBar;
use polyhash::resolver;
use polyhash::wildcard;

#[derive(Parser)]
#[command(name = "polyhash")]
#[command(version, about = "Compute cryptographic digests of files and strings", long_about = None)]
struct Cli {
    /// Files or glob patterns to hash; literal payloads with --string
    targets: Vec<String>,

    /// Algorithm names, groups (sha, sha3, blake, shake), or "all"
    /// [default: md5 sha1 sha256]
    #[arg(short, long, value_name = "NAME", num_args = 1..)]
    algorithms: Vec<String>,

    /// Hash the targets as literal strings; with no targets, read piped stdin
    #[arg(short, long)]
    string: bool,

    /// Show a progress bar while hashing files
    #[arg(short, long)]
    progressbar: bool,

    /// List supported algorithms and exit
    #[arg(short, long)]
    list_algorithms: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), HashError> {
    if cli.list_algorithms {
        for info in catalog::algorithms() {
            println!("{}", info.name);
        }
        return Ok(());
    }

    // Resolve once, before any target is touched, so a bad token aborts
    // the run without a single digest being printed
    let algorithms = resolver::resolve(&cli.algorithms)?;
    log::debug!("resolved algorithms: {:?}", algorithms);

    let engine = HashEngine::new();
    if cli.string {
        hash_strings(&engine, &cli.targets, &algorithms)
    } else {
        hash_files(&engine, &cli.targets, &algorithms, cli.progressbar)
    }
}

// String mode: each target is a literal payload; with no targets, one
// payload comes from piped stdin
fn hash_strings(
    engine: &HashEngine,
    targets: &[String],
    algorithms: &[String],
) -> Result<(), HashError> {
    let payloads = if targets.is_empty() {
        vec![read_stdin_payload()?]
    } else {
        targets.to_vec()
    };

    for payload in &payloads {
        println!("hashing string: {}", payload);
        let results = engine.hash_bytes(payload.as_bytes(), algorithms)?;
        print_results(&results);
    }
    Ok(())
}

fn read_stdin_payload() -> Result<String, HashError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(HashError::MissingInput {
            message: "No input detected on stdin".to_string(),
        });
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .map_err(|e| HashError::from_io_error(e, "reading from stdin", None))?;
    Ok(input.trim().to_string())
}

// File mode: expand wildcards, skip non-files with a warning, hash the rest
fn hash_files(
    engine: &HashEngine,
    targets: &[String],
    algorithms: &[String],
    progressbar: bool,
) -> Result<(), HashError> {
    if targets.is_empty() {
        return Err(HashError::MissingInput {
            message: "No files specified".to_string(),
        });
    }

    for target in targets {
        for path in wildcard::expand_pattern(target)? {
            match hash_one_file(engine, &path, algorithms, progressbar) {
                Err(HashError::NotAFile { path }) => {
                    log::debug!("skipping non-file target {}", path.display());
                    eprintln!(
                        "{}",
                        format!("{} is not a file - skipping", path.display()).yellow()
                    );
                }
                other => other?,
            }
        }
    }
    Ok(())
}

fn hash_one_file(
    engine: &HashEngine,
    path: &Path,
    algorithms: &[String],
    progressbar: bool,
) -> Result<(), HashError> {
    if !path.is_file() {
        return Err(HashError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    println!("hashing: {}", path.display());
    let results = if progressbar {
        let mut bar = ProgressBar::new();
        engine.hash_file(path, algorithms, Some(&mut bar))?
    } else {
        engine.hash_file(path, algorithms, None)?
    };
    print_results(&results);
    Ok(())
}

// One line per algorithm, the name and colon left-justified to 9 columns,
// then a blank line to separate targets
fn print_results(results: &[HashResult]) {
    for result in results {
        println!("{:<9} {}", format!("{}:", result.algorithm), result.hash);
    }
    println!();
}
