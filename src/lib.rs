//! log-tail - console subscriber for a structured log topic
//!
//! Entries arrive through a [`transport::Transport`], pass the sequence
//! watermark in [`logging::AdmissionFilter`] and are printed as colored
//! lines by [`logging::LogConsole`]. [`spin::DeliveryLoop`] drives it all.

pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod spin;
pub mod transport;
