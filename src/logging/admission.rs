//! Duplicate suppression by sequence number
//!
//! Transports that retry or reorder can hand the same record over more than
//! once. A single watermark (last accepted sequence) decides whether a
//! record is fresh enough to render.

/// Sequence watermark gate
///
/// Sequence `0` means "unnumbered": it is always accepted and stored like
/// any other accepted value, so it lowers the watermark back to zero.
///
/// The watermark is a plain `u32` compared with `<=`. Once a producer wraps
/// past `u32::MAX`, every record is rejected until a zero-sequence record
/// resets it. There is no wrap-aware comparison.
#[derive(Debug, Default)]
pub struct AdmissionFilter {
    last_accepted: u32,
}

impl AdmissionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `seq` is fresh, updating the watermark on accept
    #[inline]
    pub fn accept(&mut self, seq: u32) -> bool {
        if seq != 0 && seq <= self.last_accepted {
            return false;
        }
        self.last_accepted = seq;
        true
    }

    /// Sequence of the most recently accepted record
    #[inline]
    pub fn watermark(&self) -> u32 {
        self.last_accepted
    }
}
