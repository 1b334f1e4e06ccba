//! Errors surfaced by fallible deque operations.

/// A capacity request that cannot be represented in `usize`.
///
/// `used` counts occupied slots including the sentinel; `additional` is what the caller
/// asked for on top of that.  The deque is left unmodified when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    #[error("capacity overflow: {used} used slots + {additional} additional")]
    CapacityOverflow { used: usize, additional: usize },
}
