//! The address-info node factory and the result list it feeds.

use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};

use crate::hints::Hints;

/// The address family of a resolved node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Inet,
    Inet6,
}

impl Family {
    pub(crate) fn of(addr: IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::Inet,
            IpAddr::V6(_) => Family::Inet6,
        }
    }
}

/// A single resolved endpoint.
///
/// The C API's embedded-sockaddr ABI detail ("`ai_addr` points into the
/// same allocation as the node") has no meaning for a safe Rust value:
/// `SocketAddr` already couples family, address and port in one value
/// that cannot be constructed with a mismatched family, so that
/// invariant holds unconditionally rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddrInfo {
    pub family: Family,
    pub sockaddr: SocketAddr,
    pub socktype: i32,
    pub protocol: i32,
    pub canonical_name: Option<String>,
}

impl AddrInfo {
    /// Allocate a node for `addr`, inheriting socket type, protocol and
    /// flags-derived fields from `hints`, with port zero. The C API's
    /// out-of-memory failure mode can't happen in safe Rust (allocation
    /// failure aborts the process), so this constructor is infallible.
    pub(crate) fn new(addr: IpAddr, hints: &Hints) -> AddrInfo {
        AddrInfo {
            family: Family::of(addr),
            sockaddr: SocketAddr::new(addr, 0),
            socktype: hints.socktype,
            protocol: hints.protocol,
            canonical_name: None,
        }
    }
}

/// The result chain, owned in full by the request that produced it.
/// Internally a `VecDeque` rather than a singly-linked list of raw
/// allocations, materialising the linked view lazily on return.
/// `prepend` keeps the O(1) bound the original's linked-list `ai_next`
/// push gave.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddrInfoList(VecDeque<AddrInfo>);

impl AddrInfoList {
    pub(crate) fn new() -> AddrInfoList {
        AddrInfoList(VecDeque::new())
    }

    /// Prepend is O(1).
    pub(crate) fn prepend(&mut self, node: AddrInfo) {
        self.0.push_front(node);
    }

    pub(crate) fn head(&self) -> Option<&AddrInfo> {
        self.0.front()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut AddrInfo> {
        self.0.front_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddrInfo> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AddrInfo> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Release operation, matching `ares_freeaddrinfo`. A no-op beyond
    /// `Drop`: kept for API parity and so callers that previously called
    /// the release function explicitly (as they must in the C API) have
    /// a direct equivalent, including on an already-empty list.
    pub fn free(self) {
        drop(self)
    }
}

impl IntoIterator for AddrInfoList {
    type Item = AddrInfo;
    type IntoIter = std::collections::vec_deque::IntoIter<AddrInfo>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_puts_node_at_head() {
        let hints = Hints::default();
        let mut list = AddrInfoList::new();
        list.prepend(AddrInfo::new("127.0.0.1".parse().unwrap(), &hints));
        list.prepend(AddrInfo::new("10.0.0.1".parse().unwrap(), &hints));
        assert_eq!(list.head().unwrap().sockaddr.ip(), "10.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn free_on_empty_list_is_noop() {
        AddrInfoList::new().free();
    }
}
