//! Request lifecycle — entry validation, request-context allocation,
//! initial bitmask derivation, and release.

use std::rc::Rc;

use log::trace;

use crate::addrinfo::AddrInfoList;
use crate::error::GaiError;
use crate::hints::{HintFlags, Hints};
use crate::host::DnsChannel;
use crate::service::{ProtocolDatabase, ServiceDatabase};
use crate::state::{next_state, Pending};

/// What the user callback is ultimately handed: the cumulative timeout
/// count plus either the resolved chain or a terminal failure.
pub type Completion = Box<dyn FnOnce(u32, Result<AddrInfoList, GaiError>)>;

/// The request context. Owns everything the resolution needs; released
/// exactly once, immediately before invoking the user callback, on every
/// terminal path.
pub(crate) struct Request {
    pub(crate) channel: Rc<dyn DnsChannel>,
    pub(crate) protocols: Rc<dyn ProtocolDatabase>,
    pub(crate) services: Rc<dyn ServiceDatabase>,
    pub(crate) node: Option<String>,
    pub(crate) service: Option<String>,
    pub(crate) hints: Hints,
    pub(crate) chain: AddrInfoList,
    pub(crate) pending: Pending,
    pub(crate) timeouts: u32,
    callback: Option<Completion>,
}

impl Request {
    /// Terminal failure path: invoke the callback with `err` and drop
    /// everything. Any partial chain built so far is dropped along with
    /// `self` — partial progress is never surfaced.
    pub(crate) fn fail(&mut self, err: GaiError) {
        trace!("request failed: {err}");
        if let Some(cb) = self.callback.take() {
            cb(self.timeouts, Err(err));
        }
    }

    /// Terminal success path: hand the chain to the caller.
    pub(crate) fn succeed(&mut self) {
        trace!("request succeeded: {} node(s)", self.chain.len());
        if let Some(cb) = self.callback.take() {
            let chain = std::mem::take(&mut self.chain);
            cb(self.timeouts, Ok(chain));
        }
    }
}

/// Entry operation: `ares_getaddrinfo` equivalent.
///
/// Validations run in a fixed order, each failing synchronously through
/// `callback` without ever allocating a [`Request`]. The "channel
/// non-null" check from the original C API is obviated by `channel`'s
/// type (`&Rc<dyn DnsChannel>` can't be null); see DESIGN.md.
pub fn getaddrinfo(
    channel: &Rc<dyn DnsChannel>,
    protocols: &Rc<dyn ProtocolDatabase>,
    services: &Rc<dyn ServiceDatabase>,
    node: Option<&str>,
    service: Option<&str>,
    hints: Option<&Hints>,
    callback: impl FnOnce(u32, Result<AddrInfoList, GaiError>) + 'static,
) {
    trace!("getaddrinfo: node={node:?} service={service:?}");

    if node.is_none() && service.is_none() {
        callback(0, Err(GaiError::NoName));
        return;
    }

    let hints = hints.copied().unwrap_or_else(Hints::for_absent_hints);

    if hints.flags.contains(HintFlags::CANONNAME) && node.is_none() {
        callback(0, Err(GaiError::BadFlags));
        return;
    }

    if hints.bad_flags() {
        callback(0, Err(GaiError::BadFlags));
        return;
    }

    // `FamilyHint` can only ever represent Unspec/Inet/Inet6, so a
    // "family outside {Unspec, Inet, Inet6}" check is unreachable through
    // the safe API; `GaiError::BadFamily` stays around for embedders
    // constructing hints from an untyped integer.

    let mut pending = Pending::empty();

    if service.is_some() {
        pending |= Pending::SERV | Pending::NUMERIC_SERV;
    }

    let wants_inet = node.is_some() && hints.family.wants_inet(hints.flags);
    let wants_inet6 = node.is_some() && hints.family.wants_inet6();

    if wants_inet {
        pending |= Pending::HOST_INET;
    }
    if wants_inet6 {
        pending |= Pending::HOST_INET6;
    }
    // Numeric attempts are gated on the family condition alone, not on
    // node presence: when node is absent, the numeric step is what
    // materialises the passive/loopback default, so it must still honour
    // a family restriction (e.g. `family: Inet` with no node must yield
    // only an IPv4 wildcard, not one of each family).
    if hints.family.wants_inet(hints.flags) {
        pending |= Pending::NUMERIC_HOST_INET;
    }
    if hints.family.wants_inet6() {
        pending |= Pending::NUMERIC_HOST_INET6;
    }

    if hints.flags.contains(HintFlags::CANONNAME) {
        pending |= Pending::CANONICAL;
    }

    let req = Box::new(Request {
        channel: channel.clone(),
        protocols: protocols.clone(),
        services: services.clone(),
        node: node.map(str::to_owned),
        service: service.map(str::to_owned),
        hints,
        chain: AddrInfoList::default(),
        pending,
        timeouts: 0,
        callback: Some(Box::new(callback)),
    });

    next_state(req);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_node_and_service_absent_fails_synchronously() {
        let channel: Rc<dyn DnsChannel> = Rc::new(crate::test_support::EmptyChannel);
        let protocols: Rc<dyn ProtocolDatabase> = Rc::new(crate::test_support::EmptyDb);
        let services: Rc<dyn ServiceDatabase> = Rc::new(crate::test_support::EmptyDb);

        let mut seen = None;
        getaddrinfo(&channel, &protocols, &services, None, None, None, |_, r| {
            seen = Some(r);
        });
        assert_eq!(seen, Some(Err(GaiError::NoName)));
    }

    #[test]
    fn canonname_without_node_fails_with_bad_flags() {
        let channel: Rc<dyn DnsChannel> = Rc::new(crate::test_support::EmptyChannel);
        let protocols: Rc<dyn ProtocolDatabase> = Rc::new(crate::test_support::EmptyDb);
        let services: Rc<dyn ServiceDatabase> = Rc::new(crate::test_support::EmptyDb);

        let hints = Hints {
            flags: HintFlags::CANONNAME,
            ..Hints::default()
        };

        let mut seen = None;
        getaddrinfo(
            &channel,
            &protocols,
            &services,
            None,
            Some("80"),
            Some(&hints),
            |_, r| seen = Some(r),
        );
        assert_eq!(seen, Some(Err(GaiError::BadFlags)));
    }

    #[test]
    fn ai_all_without_v4mapped_fails_with_bad_flags() {
        let channel: Rc<dyn DnsChannel> = Rc::new(crate::test_support::EmptyChannel);
        let protocols: Rc<dyn ProtocolDatabase> = Rc::new(crate::test_support::EmptyDb);
        let services: Rc<dyn ServiceDatabase> = Rc::new(crate::test_support::EmptyDb);

        let hints = Hints {
            flags: HintFlags::ALL,
            ..Hints::default()
        };

        let mut seen = None;
        getaddrinfo(
            &channel,
            &protocols,
            &services,
            Some("example.com"),
            None,
            Some(&hints),
            |_, r| seen = Some(r),
        );
        assert_eq!(seen, Some(Err(GaiError::BadFlags)));
    }
}
