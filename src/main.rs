//! recursion-tasks - Four Recursion Exercises
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use recursion_tasks::config::{
    validate_recursion_limit, validate_thread_count, CliArgs, Command, WalkArgs, WalkConfig,
};
use recursion_tasks::convert::{string_value, string_value_iterative};
use recursion_tasks::menu::Menu;
use recursion_tasks::parity::{check_parity, ParityMethod};
use recursion_tasks::progress::{print_header, print_summary, ProgressReporter};
use recursion_tasks::sum::{
    run_non_reentrant_demo, run_reentrant_demo, sum_array, sum_array_non_reentrant, SharedIndex,
    DEMO_VALUES,
};
use recursion_tasks::walker::{format_size, DirSizeWalker};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose);

    match args.command.clone().unwrap_or(Command::Menu) {
        Command::Convert { value, base } => run_convert(value, base),
        Command::DirSize { path, walk } => run_dir_size(&path, &walk, args.quiet),
        Command::Parity {
            value,
            recursion_limit,
        } => run_parity(value, recursion_limit),
        Command::Sum {
            values,
            threads,
            non_reentrant,
        } => run_sum(values, threads, non_reentrant, args.quiet),
        Command::Menu => run_menu(),
    }
}

fn run_convert(value: i64, base: u32) -> Result<()> {
    let recursive = string_value(value, base).context("Recursive conversion failed")?;
    let iterative = string_value_iterative(value, base).context("Iterative conversion failed")?;

    println!("Recursive: {}", recursive);
    println!("Iterative: {}", iterative);
    Ok(())
}

fn run_dir_size(path: &Path, walk: &WalkArgs, quiet: bool) -> Result<()> {
    let config = WalkConfig::from_args(walk, quiet).context("Invalid configuration")?;
    let show_progress = config.show_progress;
    let walker = DirSizeWalker::new(config);

    // Setup signal handler for graceful shutdown
    let shutdown_flag = walker.shutdown_flag();
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupt received, stopping walk...");
        shutdown_flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to set signal handler")?;

    let display_path = path.display().to_string();

    let stats = if show_progress {
        print_header("Recursive Directory Size Calculator");
        let progress = ProgressReporter::new();
        let stats = walker.run_with_progress(path, |p| progress.update(&p));
        progress.finish_and_clear();
        print_summary(&display_path, &stats);
        stats
    } else {
        let stats = walker.walk(path);
        println!("Total size: {}", format_size(stats.bytes));
        stats
    };

    if !stats.completed {
        info!("Walk was interrupted before completion");
    }

    if stats.errors > 0 {
        info!(errors = stats.errors, "Some paths could not be read and were counted as empty");
    }

    Ok(())
}

fn run_parity(value: i64, recursion_limit: u64) -> Result<()> {
    let limit = validate_recursion_limit(recursion_limit).context("Invalid configuration")?;
    let report = check_parity(value, limit);

    if report.method == ParityMethod::Iterative {
        warn!(
            "|{}| exceeds recursion limit {}, answered iteratively",
            value, limit
        );
    }

    println!("isEven({}) = {}", value, report.even);
    println!("isOdd({}) = {}", value, report.odd);
    Ok(())
}

fn run_sum(values: Vec<i64>, threads: usize, non_reentrant: bool, quiet: bool) -> Result<()> {
    let threads = validate_thread_count(threads).context("Invalid configuration")?;
    let values = if values.is_empty() {
        DEMO_VALUES.to_vec()
    } else {
        values
    };

    if !quiet {
        print_header(if non_reentrant {
            "Non-Reentrant Recursive Sum (race demo)"
        } else {
            "Reentrant Recursive Sum (Multi-thread demo)"
        });
    }

    if non_reentrant {
        let index = SharedIndex::new();
        println!(
            "Array sum (non-reentrant, single caller): {}",
            sum_array_non_reentrant(&values, &index)
        );
        for result in run_non_reentrant_demo(&values, threads).context("Sum demo failed")? {
            println!("{} -> sum: {}", result.thread, result.sum);
        }
    } else {
        println!("Array sum (reentrant): {}", sum_array(&values, 0));
        for result in run_reentrant_demo(&values, threads).context("Sum demo failed")? {
            println!("{} -> sum: {}", result.thread, result.sum);
        }
    }

    Ok(())
}

fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run().context("Menu failed")?;
    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recursion_tasks=debug,warn")
    } else {
        EnvFilter::new("recursion_tasks=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
