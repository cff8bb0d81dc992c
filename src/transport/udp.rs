//! UDP log transport
//!
//! Receives newline-separated JSON `LogEntry` records in UDP datagrams on a
//! background thread and publishes them into a bounded queue. The delivery
//! loop drains the queue through `Transport::spin_once`.

use super::{Consumer, Publisher, QueuedTransport, SubscribeOptions, Transport};
use crate::constants::{RECEIVER_POLL_TIMEOUT_MS, UDP_BUFFER_SIZE};
use crate::error::{Result, TailError};
use crate::logging::LogEntry;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// UDP-fed transport
///
/// The receiver thread stops shortly after the transport is dropped.
pub struct UdpTransport {
    queue: QueuedTransport,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

impl UdpTransport {
    /// Bind `addr`, register `consumer` and start receiving
    pub fn bind(
        addr: &str,
        options: SubscribeOptions,
        consumer: Arc<dyn Consumer>,
    ) -> Result<Self> {
        // Bind up-front so callers can handle port-in-use cleanly.
        let socket = UdpSocket::bind(addr).map_err(|source| TailError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        let local_addr = socket.local_addr().map_err(|source| TailError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        if let Err(e) = socket.set_read_timeout(Some(Duration::from_millis(RECEIVER_POLL_TIMEOUT_MS)))
        {
            warn!("Failed to set socket timeout: {}", e);
        }

        let (queue, publisher) = QueuedTransport::subscribe(options, consumer);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_rx = shutdown.clone();

        std::thread::Builder::new()
            .name("log-receiver".to_string())
            .spawn(move || {
                let recv = |buf: &mut [u8]| socket.recv_from(buf).map(|(len, _addr)| len);
                run_receiver(recv, publisher, shutdown_rx)
            })
            .map_err(|source| TailError::Spawn { source })?;

        debug!(addr = %local_addr, topic = %queue.options().topic, "receiver started");

        Ok(Self {
            queue,
            local_addr,
            shutdown,
        })
    }

    /// Address the receiver socket is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl Transport for UdpTransport {
    fn spin_once(&mut self) -> Result<usize> {
        self.queue.spin_once()
    }
}

impl Drop for UdpTransport {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

/// Run the receiver loop (blocking, runs in thread)
///
/// Only the shutdown flag ends the loop. Socket errors are logged and the
/// receive is retried after one poll interval.
fn run_receiver<R>(mut recv: R, publisher: Publisher, shutdown: Arc<AtomicBool>)
where
    R: FnMut(&mut [u8]) -> std::io::Result<usize>,
{
    let mut buf = vec![0u8; UDP_BUFFER_SIZE];

    while !shutdown.load(Ordering::Relaxed) {
        match recv(&mut buf) {
            Ok(len) => {
                for entry in decode_datagram(&buf[..len]) {
                    publisher.publish(entry);
                }
            }
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                // Timeout - check shutdown and continue
            }
            Err(e) => {
                warn!("Log receiver socket error: {}", e);
                std::thread::sleep(Duration::from_millis(RECEIVER_POLL_TIMEOUT_MS));
            }
        }
    }
    debug!("receiver stopped");
}

/// Parse every JSON line in a datagram, skipping malformed ones
fn decode_datagram(data: &[u8]) -> Vec<LogEntry> {
    let Ok(text) = std::str::from_utf8(data) else {
        debug!(len = data.len(), "dropping non-UTF-8 datagram");
        return Vec::new();
    };

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<LogEntry>(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("dropping malformed entry: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogConsole, LogLevel, MemorySink};
    use std::collections::VecDeque;
    use std::io;

    #[test]
    fn test_decode_single_entry() {
        let data = br#"{"seq":1,"stamp_sec":10,"stamp_usec":5,"level":2,"node_name":"imu","message":"drift"}"#;
        let entries = decode_datagram(data);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].seq, 1);
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].node_name, "imu");
        assert_eq!(entries[0].message, "drift");
    }

    #[test]
    fn test_decode_multiple_lines() {
        let data = b"{\"seq\":1,\"stamp_sec\":0,\"stamp_usec\":0,\"level\":0}\n\n{\"seq\":2,\"stamp_sec\":0,\"stamp_usec\":0,\"level\":1}\n";
        let seqs: Vec<u32> = decode_datagram(data).iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[test]
    fn test_decode_skips_malformed_lines() {
        let data = b"not json\n{\"seq\":3,\"stamp_sec\":0,\"stamp_usec\":0,\"level\":9}";
        let entries = decode_datagram(data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Unknown);
    }

    #[test]
    fn test_decode_non_utf8() {
        assert!(decode_datagram(&[0xff, 0xfe, 0x00]).is_empty());
    }

    #[test]
    fn test_receiver_keeps_running_after_socket_error() {
        let sink = MemorySink::new();
        let console = Arc::new(LogConsole::new(sink.clone()));
        let (mut queue, publisher) = QueuedTransport::subscribe(SubscribeOptions::default(), console);
        let shutdown = Arc::new(AtomicBool::new(false));

        let datagram = br#"{"seq":1,"stamp_sec":0,"stamp_usec":0,"level":1,"node_name":"n","message":"after error"}"#;
        let mut script: VecDeque<io::Result<Vec<u8>>> = VecDeque::from([
            Err(io::Error::from(io::ErrorKind::ConnectionRefused)),
            Err(io::Error::from(io::ErrorKind::WouldBlock)),
            Ok(datagram.to_vec()),
        ]);
        let stop = shutdown.clone();
        let recv = move |buf: &mut [u8]| match script.pop_front() {
            Some(Ok(data)) => {
                buf[..data.len()].copy_from_slice(&data);
                Ok(data.len())
            }
            Some(Err(e)) => Err(e),
            None => {
                stop.store(true, Ordering::Relaxed);
                Err(io::Error::from(io::ErrorKind::WouldBlock))
            }
        };

        run_receiver(recv, publisher, shutdown);

        assert_eq!(queue.spin_once().unwrap(), 1);
        assert!(sink.lines()[0].contains("after error"));
    }
}
