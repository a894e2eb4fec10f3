//! CLI argument definitions for `nestmatch`.

use std::path::PathBuf;

use clap::{Args, Parser};
use nestmatch::Window;

use crate::output::OutputFormat;

/// Matcher settings are read by the settings loader and listed here so
/// they appear in `--help`.
const SETTINGS_HELP: &str = "\
Matcher settings (also read from NESTMATCH_* variables and the TOML file
named by --config-path or NESTMATCH_CONFIG_PATH):
      --start <PATTERN>         Pattern for the opening marker
      --end <PATTERN>           Pattern for the closing marker
      --prepended <PATTERN>     Pattern that must end where an opening begins
      --appended <PATTERN>      Pattern that must begin where a closing ends
      --capture-name <NAME>     Names the group bound to the enclosed text
      --inverse <PATTERN>       Matches this pattern outside every region
      --global                  Reports regions at every nesting depth
      --ignore-case             Matches letters regardless of case
      --multi-line              Lets ^ and $ match at line boundaries
      --unicode                 Enables Unicode-aware classes and folding
      --dot-all                 Lets . match line breaks
      --log-filter <FILTER>     Tracing filter directive [default: warn]
      --log-format <FORMAT>     compact or json [default: compact]";

/// Command-line interface for everything except the matcher settings.
#[derive(Parser, Debug)]
#[command(
    name = "nestmatch",
    version,
    about = "Finds balanced, possibly nested, delimited regions in text",
    after_help = SETTINGS_HELP
)]
pub(crate) struct Cli {
    /// File to search; standard input is read when omitted.
    #[arg(value_name = "FILE")]
    pub(crate) file: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Controls how matches are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
}

/// Flags choosing which matches are reported.
#[derive(Args, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Reports only the first match.
    #[arg(long, group = "pick")]
    pub(crate) first: bool,
    /// Reports only the last match.
    #[arg(long, group = "pick")]
    pub(crate) last: bool,
    /// Reports only the match at this zero-based index.
    #[arg(long, value_name = "N", group = "pick")]
    pub(crate) nth: Option<usize>,
    /// Index of the first reported match.
    #[arg(long, value_name = "START", conflicts_with = "pick")]
    pub(crate) skip: Option<usize>,
    /// Index of the last reported match, inclusive.
    #[arg(long, value_name = "STOP", conflicts_with = "pick")]
    pub(crate) stop: Option<usize>,
    /// Counts indices from the last match backwards.
    #[arg(long, short = 'r')]
    pub(crate) reverse: bool,
    /// Byte offset where matching begins; reports every match after it.
    #[arg(
        long,
        value_name = "BYTES",
        conflicts_with_all = ["pick", "skip", "stop", "reverse"]
    )]
    pub(crate) offset: Option<usize>,
    /// Prints the number of matches instead of the matches.
    #[arg(long, short = 'c')]
    pub(crate) count: bool,
}

impl SelectionArgs {
    /// Maps the selection flags to a result window.
    pub(crate) const fn window(&self) -> Window {
        if self.first {
            return Window::new(0, Some(0), self.reverse);
        }
        if self.last {
            return Window::new(0, Some(0), !self.reverse);
        }
        if let Some(index) = self.nth {
            return Window::nth(index, self.reverse);
        }
        let start = match self.skip {
            Some(start) => start,
            None => 0,
        };
        Window::new(start, self.stop, self.reverse)
    }
}
