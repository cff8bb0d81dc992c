//! log-tail - print the /log topic to the console
//!
//! Usage:
//!   log-tail                  Listen on 127.0.0.1:9100
//!   log-tail --port 9200      Listen on another port
//!   log-tail -v               Diagnostics on stderr
//!
//! Runs until interrupted (Ctrl+C).

use clap::Parser;
use log_tail::cli::Cli;
use log_tail::constants::SPIN_RATE_HZ;
use log_tail::error::{Result, TailError};
use log_tail::logging::{self, format, LogConsole, StdoutSink};
use log_tail::spin::{DeliveryLoop, Rate};
use log_tail::transport::{SubscribeOptions, UdpTransport};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

const RULE: &str = "==================================================";
const SEPARATOR: &str = "---------------------------------------------------";

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("log-tail: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<std::convert::Infallible> {
    let green = format::level_color(logging::LogLevel::Info);
    let cyan = crossterm::style::SetForegroundColor(crossterm::style::Color::DarkCyan);
    let reset = format::reset();
    let options = SubscribeOptions::default();

    print_lines(&[
        format!("{green}{RULE}{reset}"),
        format!(
            "{green}  Log Subscriber - Listening to {} topic{reset}",
            options.topic
        ),
        format!("{green}{RULE}{reset}"),
        String::new(),
    ])?;

    let topic = options.topic.clone();
    let console = Arc::new(LogConsole::new(StdoutSink::new()));
    let transport = UdpTransport::bind(&cli.listen_addr(), options, console)?;

    let mut banner = vec![
        format!(
            "{cyan}Subscribed to {} topic on {}. Waiting for messages...{reset}",
            topic,
            transport.local_addr()
        ),
        String::new(),
    ];
    banner.extend(format::legend());
    banner.extend([
        String::new(),
        "Press Ctrl+C to exit".to_string(),
        SEPARATOR.to_string(),
        String::new(),
    ]);
    print_lines(&banner)?;

    DeliveryLoop::new(transport, Rate::new(SPIN_RATE_HZ)).run()
}

fn print_lines(lines: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line))
        .and_then(|_| out.flush())
        .map_err(|source| TailError::Output { source })
}
