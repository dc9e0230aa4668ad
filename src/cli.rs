//! The dotgraph command-line interface.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use walkdir::WalkDir;

use crate::cli::args::{Command, DotArgs};
use crate::diagnostics::DotError;
use crate::{err_msg, parse_file};

pub mod args;
pub mod output;

/// Entry point for the `dotgraph` binary.
pub fn run() {
    let args = DotArgs::parse();

    let result = match args.command {
        Command::Check { path } => handle_check(&path, args.verbose),
        Command::Inspect { file, json } => handle_inspect(&file, json, args.verbose),
    };

    if let Err(e) = result {
        output::print_error(e);
        process::exit(1);
    }
}

fn handle_inspect(file: &Path, json: bool, verbose: bool) -> Result<(), DotError> {
    let graph = parse_file(file, verbose)?;
    let written = if json {
        output::print_json(&graph).map_err(|e| e.to_string())
    } else {
        output::print_inspection(&graph).map_err(|e| e.to_string())
    };
    // stdout going away (e.g. a closed pipe) is not a parse failure
    if let Err(message) = written {
        eprintln!("failed to write output: {}", message);
    }
    Ok(())
}

fn handle_check(path: &Path, verbose: bool) -> Result<(), DotError> {
    let files = discover_dot_files(path)?;
    if files.len() == 1 {
        let result = parse_file(&files[0], verbose);
        output::print_check_result(&files[0], &result);
        return result.map(|_| ());
    }

    let mut failed = 0;
    for file in &files {
        let result = parse_file(file, verbose);
        output::print_check_result(file, &result);
        if let Err(e) = result {
            failed += 1;
            output::print_error(e);
        }
    }

    if failed > 0 {
        return Err(err_msg!(Check, "{} of {} files failed to parse", failed, files.len()));
    }
    Ok(())
}

/// `path` itself when it is a file, else every `*.dot` file below it, sorted.
fn discover_dot_files(path: &Path) -> Result<Vec<PathBuf>, DotError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message.clone()));
            DotError::io(path.display(), source)
        })?;
        let is_dot = entry.path().extension().is_some_and(|ext| ext == "dot");
        if entry.file_type().is_file() && is_dot {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
