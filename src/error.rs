//! The error taxonomy produced by the resolution state machine.
//!
//! These codes are specific to this crate's contract, the way `c-ares`'s
//! own `ARES_E*` codes are specific to its contract rather than to POSIX
//! `getaddrinfo`'s `EAI_*` numbering.

use std::fmt;

/// A terminal failure of [`crate::getaddrinfo`].
///
/// Every variant corresponds to exactly one condition in the state
/// machine; none is ever raised speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaiError {
    /// Any allocation failure (request, string copy, result node,
    /// canonical-name copy). Rust's allocator reports this as a process
    /// abort rather than a recoverable error, so this variant exists for
    /// API completeness and for collaborators that surface their own
    /// allocation failures (e.g. a `DnsChannel` backed by a fixed-size
    /// arena).
    NoMemory,
    /// The DNS channel argument was null. Unreachable through
    /// [`crate::getaddrinfo`], whose `channel` parameter is a
    /// `&Rc<dyn DnsChannel>` and therefore never null; kept for
    /// embedders who build a channel reference dynamically and want a
    /// uniform error enum.
    BadQuery,
    /// Both node and service were absent; or `AI_NUMERICHOST` was set but
    /// the node didn't parse as numeric; or `AI_NUMERICSERV` was set but
    /// the service didn't parse as numeric; or symbolic service lookup
    /// failed.
    NoName,
    /// `AI_CANONNAME` without a node; or `AI_ALL` without `AI_V4MAPPED`.
    BadFlags,
    /// Hints family outside `{Unspec, Inet, Inet6}`; or default-protocol
    /// derivation failed; or a result node carries an unknown family.
    BadFamily,
    /// Protocol-by-number lookup failed during service resolution.
    BadHints,
    /// `AI_CANONNAME` was requested but no canonical name was available
    /// anywhere in the result chain.
    BadName,
    /// The state machine reached an un-dispatchable bitmask. Indicates a
    /// broken internal invariant; should never be observed.
    FormErr,
}

impl fmt::Display for GaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GaiError::NoMemory => "allocation failure",
            GaiError::BadQuery => "invalid DNS channel",
            GaiError::NoName => "name or service not known",
            GaiError::BadFlags => "invalid hints flags",
            GaiError::BadFamily => "address family not supported",
            GaiError::BadHints => "invalid hints for service lookup",
            GaiError::BadName => "no canonical name available",
            GaiError::FormErr => "internal state machine error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for GaiError {}
