#![forbid(unsafe_code)]

//! # dropdown-replay
//!
//! Replays a line-oriented event script against a headless dropdown and
//! prints the projected state after every event.
//!
//! ## Usage
//!
//! ```bash
//! dropdown-replay --options options.json --script session.txt
//! dropdown-replay -o options.json --json < session.txt
//! dropdown-replay -o options.json -v --log-json < session.txt 2> log.jsonl
//! ```

mod cli;
mod replay;

use std::fs::{self, File};
use std::io::{self, BufReader, Read};

use anyhow::{Context, bail};
use dropdown::{Dropdown, DropdownConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DropdownConfig<serde_json::Value>> {
    let file = File::open(&cli.options)
        .with_context(|| format!("failed to open {}", cli.options.display()))?;
    let mut config = DropdownConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load {}", cli.options.display()))?;

    if cli.looping {
        config.looping = true;
    }
    if let Some(placeholder) = &cli.placeholder {
        config.placeholder.clone_from(placeholder);
    }
    Ok(config)
}

fn read_script(cli: &Cli) -> anyhow::Result<String> {
    match &cli.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let config = load_config(&cli)?;
    debug!(options = config.len(), looping = config.looping, "configuration loaded");

    let mut widget = Dropdown::new(config);
    if let Some(key) = &cli.selected {
        if !widget.select_key(key) {
            bail!("no option with key `{key}`");
        }
    }

    let script = read_script(&cli)?;
    let (reports, widget) = replay::replay(widget, &script)?;

    for report in &reports {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{report}");
        }
    }
    if cli.view {
        println!("{}", widget.view());
    }
    Ok(())
}
