use crate::options::Options;
use lexopt::{Arg, Parser, ValueExt};
use std::num::{NonZeroU16, NonZeroU64};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake in the terminal.

Options:
  -c, --config <PATH>   Read configuration from the given file
      --no-config       Do not read any configuration file
      --width <N>       Width of the board in cells
      --height <N>      Height of the board in cells
      --length <N>      Initial length of the snake
      --speed <MS>      Milliseconds between moves of the snake
      --cell <N>        Terminal columns used to draw each cell
      --wrap            Let the snake pass through the edges of the board
      --deadly-border   Make the edges of the board deadly [default]
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

/// What the user asked for on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("no-config") => args.no_config = true,
                Arg::Long("width") => args.width = Some(parser.value()?.parse()?),
                Arg::Long("height") => args.height = Some(parser.value()?.parse()?),
                Arg::Long("length") => args.initial_length = Some(parser.value()?.parse()?),
                Arg::Long("speed") => args.tick_ms = Some(parser.value()?.parse()?),
                Arg::Long("cell") => args.cell_width = Some(parser.value()?.parse()?),
                Arg::Long("wrap") => args.wrap = Some(true),
                Arg::Long("deadly-border") => args.wrap = Some(false),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

/// Settings given on the command line for a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) no_config: bool,
    width: Option<u16>,
    height: Option<u16>,
    initial_length: Option<usize>,
    tick_ms: Option<NonZeroU64>,
    cell_width: Option<NonZeroU16>,
    wrap: Option<bool>,
}

impl Arguments {
    /// Override the fields of `options` with any values given on the command
    /// line
    pub(crate) fn apply(&self, mut options: Options) -> Options {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(initial_length) = self.initial_length {
            options.initial_length = initial_length;
        }
        if let Some(tick_ms) = self.tick_ms {
            options.tick_ms = tick_ms;
        }
        if let Some(cell_width) = self.cell_width {
            options.cell_width = cell_width;
        }
        if let Some(wrap) = self.wrap {
            options.wrap = wrap;
        }
        options
    }
}
