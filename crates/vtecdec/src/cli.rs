use std::fmt::Display;

use chrono::{DateTime, Utc};
use clap::{error::ErrorKind, CommandFactory, Parser};

const USAGE_SHORT: &str = r#"
This program decodes one NWS P-VTEC string and prints its fields, with the issuing office, phenomenon, and significance spelled out.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program decodes one NWS P-VTEC string and prints its fields, with the issuing office, phenomenon, and significance spelled out.

    vtecdec '/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/'

The report ends with the event status: "pending" before the event begins, "in effect" until it ends, and "expired" afterwards. Status is evaluated at the current time unless --now is given.

    vtecdec --now 2021-02-14T18:00:00Z \
        '/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/'

Strings which cannot be decoded are reported as errors, and the program exits with a non-zero status.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print NOTHING, not even the decoded fields
    #[arg(short, long)]
    pub quiet: bool,

    /// Evaluate event status at this time (RFC 3339)
    ///
    /// Determines whether the event is reported as pending, in
    /// effect, or expired. Defaults to the current time.
    #[arg(long, value_parser = parse_time)]
    pub now: Option<DateTime<Utc>>,

    /// P-VTEC string to decode
    ///
    /// Quote it: the string contains characters which are special
    /// to some shells.
    pub code: String,
}

// Parse an RFC 3339 time like `2021-02-14T12:00:00Z`
fn parse_time(inp: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(inp)
        .map(|tm| tm.with_timezone(&Utc))
        .map_err(|e| format!("not an RFC 3339 time: {}", e))
}

/// A decode or usage failure, with the status to exit with
#[derive(Debug)]
pub enum CliError {
    /// Bad arguments, or a request for help or version
    Usage(clap::Error),

    /// The string could not be decoded
    Decode(anyhow::Error),
}

impl CliError {
    /// Process exit status
    ///
    /// Help and version requests exit successfully.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(e) if !e.use_stderr() => 0,
            _ => 1,
        }
    }

    /// Print to the terminal and exit
    ///
    /// Decode errors, with their context chain, go through clap's
    /// formatter so that they look like usage errors.
    pub fn exit(&self) -> ! {
        let printed = match self {
            CliError::Usage(e) => e.print(),
            CliError::Decode(_) => Args::command()
                .error(ErrorKind::ValueValidation, self.to_string())
                .print(),
        };
        drop(printed);
        std::process::exit(self.exit_code());
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(e) => e.fmt(f),
            CliError::Decode(e) => write!(f, "{:#}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::Decode(err)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        CliError::Usage(err)
    }
}
