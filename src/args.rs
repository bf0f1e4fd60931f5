use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl CliCommand {
    pub(crate) fn from_args() -> Result<CliCommand, lexopt::Error> {
        CliCommand::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run { config })
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: gridsnake [<options>]\n",
    "\n",
    "Play Snake on a 15x15 board with obstacles and a rising speed\n",
    "\n",
    "Options:\n",
    "  -c <file>, --config <file>\n",
    "                    Read configuration from the given file\n",
    "\n",
    "  -h, --help        Display this help message and exit\n",
    "  -V, --version     Show the program version and exit\n",
    "\n",
    "Keys:\n",
    "  Enter             Start a game\n",
    "  Arrows / WASD     Steer the snake (ignored while paused)\n",
    "  Space             Pause or resume; play again after a game ends\n",
    "  Esc               Return to the title screen after a game ends\n",
    "  q, Ctrl-C         Quit\n",
);
