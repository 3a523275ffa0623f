//! CLI entry point for shirube
//!
//! This provides a terminal player and a deck checker.

use anyhow::Context;
use shirube::config::TutorialConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

struct Options {
    file: PathBuf,
    config: Option<PathBuf>,
    debug: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" | "check" => {
            let options = match parse_options(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("Error: {err}");
                    eprintln!();
                    print_usage();
                    process::exit(1);
                }
            };
            init_logging(options.debug);

            let result = if command == "play" {
                run_play(&options).map(|()| true)
            } else {
                run_check(&options)
            };

            match result {
                Ok(true) => {}
                Ok(false) => process::exit(1),
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    process::exit(1);
                }
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("shirube - Slide-based tutorial player");
    println!();
    println!("USAGE:");
    println!("    shirube play <slides.json> [--config <config.json>] [--debug]");
    println!("    shirube check <slides.json> [--config <config.json>]");
    println!();
    println!("COMMANDS:");
    println!("    play <file>     Walk through a tutorial deck in the terminal");
    println!("    check <file>    Lint a tutorial deck");
    println!("    --help, -h      Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Tutorial configuration (narration, labels, lint)");
    println!("    --debug            Show slide state and debug logs");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHIRUBE_LOG        Log filter (default: info, or debug with --debug)");
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut file = None;
    let mut config = None;
    let mut debug = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--config" => {
                let path = iter.next().ok_or("Missing value for --config")?;
                config = Some(PathBuf::from(path));
            }
            other if other.starts_with("--") => return Err(format!("Unknown option '{other}'")),
            other if file.is_none() => file = Some(PathBuf::from(other)),
            other => return Err(format!("Unexpected argument '{other}'")),
        }
    }

    Ok(Options {
        file: file.ok_or("Missing slide file path")?,
        config,
        debug,
    })
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SHIRUBE_LOG", level))
        .format_timestamp(None)
        .init();
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

fn load_config(options: &Options) -> anyhow::Result<TutorialConfig> {
    match &options.config {
        Some(path) => Ok(TutorialConfig::load(path)?),
        None => Ok(TutorialConfig::default()),
    }
}

fn run_play(options: &Options) -> anyhow::Result<()> {
    let slides = read_file(&options.file)?;
    let config = load_config(options)?;
    shirube::cli::play::run_play(&slides, &config, options.debug)
}

fn run_check(options: &Options) -> anyhow::Result<bool> {
    let slides = read_file(&options.file)?;
    let config = load_config(options)?;
    shirube::cli::check::run_check(&slides, &config.lint)
}
