//! Command-line parsing and option resolution

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use glob::Pattern;
use log::debug;

use crate::error::{Error, Result};
use crate::output::{OutputConfig, OutputFormat};
use crate::tree::{Grouping, Options, SortKey};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "etree")]
#[command(about = "List directory contents as an indented tree")]
#[command(version, disable_help_flag = true, args_override_self = true)]
pub struct Args {
    /// Directories to list (default: current directory)
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// All files are listed, including hidden ones
    #[arg(short = 'a')]
    pub all: bool,

    /// List directories only
    #[arg(short = 'd')]
    pub dirs_only: bool,

    /// Print the full path prefix for each file
    #[arg(short = 'f')]
    pub full_path: bool,

    /// Sort by file name
    #[arg(short = 'n')]
    pub sort_name: bool,

    /// Reverse the order of the sort
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Print the size in bytes of each file
    #[arg(short = 's')]
    pub size: bool,

    /// Print sizes in a human readable format (implies -s)
    #[arg(short = 'h')]
    pub human: bool,

    /// Print the date of last modification
    #[arg(short = 'D')]
    pub date: bool,

    /// Sort by last modification time
    #[arg(short = 't')]
    pub sort_time: bool,

    /// Descend only LEVEL directories deep
    #[arg(short = 'L', value_name = "LEVEL", value_parser = clap::value_parser!(u64).range(1..))]
    pub level: Option<u64>,

    /// Leave files unsorted and ungrouped
    #[arg(short = 'U')]
    pub unsorted: bool,

    /// Do not list entries matching PATTERN (globs separated by '|')
    #[arg(short = 'I', value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// List directories before files
    #[arg(long = "dirsfirst")]
    pub dirs_first: bool,

    /// List files before directories
    #[arg(long = "filesfirst")]
    pub files_first: bool,

    /// Omit the directory and file count at the end
    #[arg(long = "noreport")]
    pub no_report: bool,

    /// Print the tree as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Print usage and this help message and exit
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Fully resolved command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub options: Options,
    pub output: OutputConfig,
    pub format: OutputFormat,
}

/// Parse `argv` (including the program name) into an `Invocation`.
///
/// `--help` and `--version` come back as `Error::ArgumentParse`; calling
/// `exit()` on the inner clap error prints them and exits 0.
pub fn parse_args<I, T>(argv: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Args::command().try_get_matches_from(argv)?;
    let args = Args::from_arg_matches(&matches)?;
    resolve(&args, &matches)
}

fn resolve(args: &Args, matches: &ArgMatches) -> Result<Invocation> {
    // -n, -t and -U override each other left to right, as do
    // --dirsfirst, --filesfirst and -U.
    let sort_key = last_given(
        matches,
        &[
            ("sort_name", SortKey::Name),
            ("sort_time", SortKey::Time),
            ("unsorted", SortKey::None),
        ],
    )
    .unwrap_or_default();
    let grouping = last_given(
        matches,
        &[
            ("dirs_first", Grouping::DirectoriesFirst),
            ("files_first", Grouping::FilesFirst),
            ("unsorted", Grouping::None),
        ],
    )
    .unwrap_or_default();

    let options = Options {
        display_all_files: args.all,
        display_file_size: args.size || args.human,
        display_full_path: args.full_path,
        display_modified: args.date,
        only_display_directories: args.dirs_only,
        reverse_order: args.reverse,
        sort_key,
        grouping,
        max_depth: args
            .level
            .map(|level| usize::try_from(level).unwrap_or(usize::MAX)),
        ignore_patterns: compile_patterns(&args.ignore)?,
        ..Default::default()
    }
    .with_roots(args.paths.iter().cloned());

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Tree
    };
    let output = OutputConfig {
        use_color: format == OutputFormat::Tree && should_use_color(args.color),
        human_sizes: args.human,
        no_report: args.no_report,
    };

    debug!("resolved options: {:?}", options);
    Ok(Invocation {
        options,
        output,
        format,
    })
}

/// Pick the value of whichever flag appeared last on the command line.
fn last_given<T: Copy>(matches: &ArgMatches, flags: &[(&str, T)]) -> Option<T> {
    flags
        .iter()
        .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|(id, value)| matches.index_of(id).map(|index| (index, *value)))
        .max_by_key(|(index, _)| *index)
        .map(|(_, value)| value)
}

fn compile_patterns(raw: &[String]) -> Result<Vec<Pattern>> {
    raw.iter()
        .flat_map(|arg| arg.split('|'))
        .filter(|p| !p.is_empty())
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::InvalidPattern {
                pattern: p.to_string(),
                source,
            })
        })
        .collect()
}
