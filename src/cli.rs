//! Command-line interface definition using clap
//!
//! Every flag is optional; with none the console listens on the default
//! local port.

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_PORT};
use clap::Parser;

/// Tail the /log topic and print color-coded entries
#[derive(Parser, Debug)]
#[command(name = "log-tail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Address to receive log datagrams on
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// UDP port to receive log datagrams on
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_LOG_PORT)]
    pub port: u16,
}

impl Cli {
    /// `bind:port` socket address string
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
