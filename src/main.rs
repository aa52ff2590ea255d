//! CLI entry point for flatcase

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use flatcase::{ConsoleReporter, JsonReporter, OutputConfig, Renamer, RenamerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flatcase")]
#[command(about = "Recursively normalize file and directory names to lowercase")]
#[command(version)]
struct Args {
    /// Directory whose contents to normalize
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output a JSON report instead of per-rename log lines
    #[arg(long = "json", conflicts_with = "quiet")]
    json: bool,

    /// Suppress per-rename log lines and the summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Leave entries whose names are already normalized alone
    /// (by default they are renamed in place and logged)
    #[arg(long = "skip-unchanged")]
    skip_unchanged: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            // Usage problems go to stdout and exit 1 before anything on
            // disk is touched.
            println!("{e}");
            process::exit(1);
        }
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "flatcase: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let renamer = Renamer::new(RenamerConfig {
        skip_unchanged: args.skip_unchanged,
    });

    let result = if args.json {
        let mut reporter = JsonReporter::new();
        renamer
            .process(&root, &mut reporter)
            .and_then(|summary| reporter.print(&summary))
    } else {
        let mut reporter = ConsoleReporter::new(OutputConfig {
            use_color: should_use_color(args.color),
            quiet: args.quiet,
        });
        renamer
            .process(&root, &mut reporter)
            .and_then(|summary| reporter.finish(&summary))
    };

    if let Err(e) = result {
        eprintln!("flatcase: {}", e);
        process::exit(1);
    }
}
