//! Command-line interface for `dropdown-replay`.
//!
//! # Examples
//!
//! ```bash
//! # Replay a script against a JSON option list
//! dropdown-replay --options options.json --script session.txt
//!
//! # Read the script from stdin, wrap navigation, emit JSON lines
//! printf 'focus trigger\nkey ArrowUp\n' | dropdown-replay -o options.json --loop --json
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Replay scripted input against a headless dropdown.
///
/// Each script line is one event. After every event the resulting state is
/// printed: whether the listbox is expanded, the highlighted and committed
/// option indices, and the trigger label.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dropdown-replay",
    author,
    version,
    about = "Replay scripted input against a headless dropdown",
    long_about = "Replays one event per script line against a dropdown built from a JSON \
                  configuration and prints the projected state after every step."
)]
pub struct Cli {
    /// JSON configuration: `{"options": [...], "loop": bool}` or a bare option array
    #[arg(long, short = 'o', env = "DROPDOWN_OPTIONS")]
    pub options: PathBuf,

    /// Event script; read from stdin when omitted
    #[arg(long, short = 's', env = "DROPDOWN_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Wrap navigation around the ends of the list
    ///
    /// Overrides the `loop` field of the configuration when set
    #[arg(long = "loop")]
    pub looping: bool,

    /// Trigger label while nothing is selected
    #[arg(long, short = 'p')]
    pub placeholder: Option<String>,

    /// Key of the option committed before the first event
    #[arg(long)]
    pub selected: Option<String>,

    /// Print one JSON object per step
    #[arg(long)]
    pub json: bool,

    /// Print the final markup after the last step
    #[arg(long)]
    pub view: bool,

    /// Write log records to stderr as JSON objects
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the verbosity flag.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
