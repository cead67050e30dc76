// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   gh-activity <username> [--api-url URL] [--timeout SECS] [--no-color] [-v]
//
// Every option except the username can also come from the environment,
// which is handy for CI or for pointing the tool at a mock server.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Option<String>: the username is optional so we can print our own hint
// =============================================================================

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Print a categorized digest of a GitHub user's recent public activity",
    long_about = "gh-activity fetches the most recent page of a user's public GitHub events \
                  and prints them grouped by repository, with an icon and a relative \
                  timestamp for each entry."
)]
pub struct Cli {
    /// GitHub username whose public events to summarize
    ///
    /// Example: gh-activity octocat
    pub username: Option<String>,

    /// Root of the GitHub REST API
    #[arg(long, env = "GH_ACTIVITY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "GH_ACTIVITY_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Disable colored output
    ///
    /// Any non-empty NO_COLOR environment variable does the same
    #[arg(long)]
    pub no_color: bool,

    /// More diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// True when --no-color was passed or NO_COLOR is set to anything non-empty
    pub fn colors_disabled(&self) -> bool {
        self.no_color || no_color_requested(std::env::var_os("NO_COLOR"))
    }
}

// https://no-color.org: presence of a non-empty value disables color,
// whatever the value is ("0" and "false" included)
fn no_color_requested(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
