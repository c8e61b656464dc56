use std::{io};
use std::io::{BufRead, Write};
use std::str::{FromStr};

use ansi_term::Colour::{self, Blue, Green, Red};

use super::{build_sample, identity, select_by_flag, Error, RangeBound, Result, WeekdayFlags};

/// The log filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Start-up settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Paint output with ANSI colours.
    pub colour: bool,

    /// An `env_logger` filter, e.g. `netdoc=debug`.
    pub log_filter: String,
}

impl Config {
    /// Reads `NO_COLOR` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var_os("NO_COLOR").as_deref(), std::env::var("RUST_LOG").ok())
    }

    /// Colour is on unless `no_color` is non-empty.
    pub fn from_vars(no_color: Option<&std::ffi::OsStr>, rust_log: Option<String>) -> Self {
        let no_color = no_color.map_or(false, |v| !v.is_empty());
        let log_filter = rust_log.filter(|f| !f.trim().is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        Self {colour: !no_color, log_filter}
    }
}

impl Default for Config {
    fn default() -> Self { Self {colour: true, log_filter: DEFAULT_LOG_FILTER.into()} }
}

// ----------------------------------------------------------------------------

/// One line of shell input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sample,
    Days(WeekdayFlags),
    Range(RangeBound),
    Select(String, String, bool),
    Identity(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        Ok(match word {
            "sample" => Self::Sample,
            "days" => {
                if rest.is_empty() { return Err(Error::MissingArgument("flags")); }
                Self::Days(rest.parse()?)
            },
            "range" => {
                if rest.is_empty() { return Err(Error::MissingArgument("bound")); }
                Self::Range(rest.parse()?)
            },
            "select" => {
                let mut args = rest.split_whitespace();
                let a = args.next().ok_or(Error::MissingArgument("a"))?;
                let b = args.next().ok_or(Error::MissingArgument("b"))?;
                let flag = args.next().ok_or(Error::MissingArgument("flag"))?;
                let flag = flag.parse().map_err(|_| Error::InvalidFlag(flag.into()))?;
                Self::Select(a.into(), b.into(), flag)
            },
            "identity" => {
                if rest.is_empty() { return Err(Error::MissingArgument("value")); }
                Self::Identity(rest.into())
            },
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => { return Err(Error::UnknownCommand(other.into())); },
        })
    }
}

const HELP: &str = "\
sample                  show the sample value graph
days <flags>            parse weekday flags, e.g. `days Monday, Friday` or `days 3`
range <Max|Min>         show a range bound
select <a> <b> <flag>   return `a` if flag is true, else `b`
identity <value>        return `value` unchanged
help                    show this text
quit, exit              leave";

// ----------------------------------------------------------------------------

/// A line-oriented inspection shell over the sample values.
#[derive(Debug, Default)]
pub struct Shell {
    pub config: Config,

    /// Set when `quit` is read or the input ends.
    pub is_complete: bool,
}

impl Shell {
    pub fn new(config: Config) -> Self { Self {config, is_complete: false} }

    /// Returns `text`, painted if colour is enabled.
    fn paint(&self, colour: Colour, text: impl std::fmt::Display) -> String {
        if self.config.colour { colour.paint(text.to_string()).to_string() } else { text.to_string() }
    }

    /// Read one line from `input` and execute it.
    ///
    /// Errors in the command are reported on `output`; only I/O errors are
    /// returned.
    pub fn step(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            self.is_complete = true;
            return Ok(());
        }
        if line.trim().is_empty() { return Ok(()); }
        log::trace!("command {:?}", line.trim());
        match line.parse::<Command>() {
            Ok(command) => self.execute(&command, output),
            Err(e) => writeln!(output, "{}", self.paint(Red, e)),
        }
    }

    /// Execute `command`, writing its result to `output`.
    pub fn execute(&mut self, command: &Command, output: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Sample => {
                let mut result = Ok(());
                build_sample().walk(&mut |depth, value| {
                    if result.is_err() { return; }
                    let indent = "  ".repeat(depth);
                    let line = match value.as_values() {
                        Some(values) => format!("{} ({})", value.class_name(), values.len()),
                        None => format!("{}: {}", value.class_name(), self.paint(Blue, value)),
                    };
                    result = writeln!(output, "{}{}", indent, line);
                });
                result
            },
            Command::Days(flags) => {
                let days: Vec<&str> = flags.days().iter().map(|day| day.name()).collect();
                writeln!(output, "{} = {} {:?}", self.paint(Blue, flags), flags.bits(), days)
            },
            Command::Range(bound) => {
                writeln!(output, "{} = {}", bound, self.paint(Blue, bound.value()))
            },
            Command::Select(a, b, flag) => {
                writeln!(output, "{}", self.paint(Blue, select_by_flag(a, b, *flag)))
            },
            Command::Identity(value) => {
                writeln!(output, "{}", self.paint(Blue, identity(value)))
            },
            Command::Help => writeln!(output, "{}", self.paint(Green, HELP)),
            Command::Quit => {
                self.is_complete = true;
                Ok(())
            },
        }
    }
}

// ----------------------------------------------------------------------------
