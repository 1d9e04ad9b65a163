use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::commands::{ListOptions, OutputFormat, command_list};

mod commands;

/// List the files behind the given file and directory arguments
#[derive(Parser)]
#[command(version, about, arg_required_else_help(true))]
struct Cli {
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[arg(short, long, default_value_t = false, help = "descend into subdirectories")]
    recursive: bool,

    #[arg(
        short = 'L',
        long,
        default_value_t = false,
        help = "follow symlinks found inside directories"
    )]
    follow_links: bool,

    #[arg(long, default_value_t = false, help = "sort output paths")]
    sort: bool,

    #[arg(
        short = '0',
        long,
        conflicts_with = "json",
        help = "separate paths with NUL instead of newline"
    )]
    null: bool,

    #[arg(long, help = "print the file list as json")]
    json: bool,
}

impl Cli {
    fn options(&self) -> ListOptions {
        let format = if self.json {
            OutputFormat::Json
        } else if self.null {
            OutputFormat::Null
        } else {
            OutputFormat::Lines
        };

        ListOptions {
            recursive: self.recursive,
            follow_links: self.follow_links,
            sort: self.sort,
            format,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = command_list(&cli.paths, &cli.options()) {
        eprintln!("{}: {:#}", "error".red().bold(), err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
