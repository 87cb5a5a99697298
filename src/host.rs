//! The host resolver bridge, and the `DnsChannel` trait it drives.
//!
//! `DnsChannel` stands in for an external, asynchronous DNS transport
//! that this crate never talks to directly. The closure-based completion
//! shape mirrors `other_examples/
//! 7436174d_dimbleby-c-ares-resolver…resolver.rs`, a real Rust wrapper
//! around `c-ares` itself, whose `query_*`/`get_host_by_name` methods all
//! take an `F: FnOnce(Result<…>) + Send + 'static` handler for exactly
//! this kind of external, possibly-deferred completion.

use std::net::IpAddr;

use crate::addrinfo::{AddrInfo, Family};
use crate::request::Request;
use crate::state::{next_state, Pending};

/// Status of a single host lookup, reported by a `DnsChannel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    Success,
    /// The name does not exist.
    NotFound,
    /// A transient failure (server failure, timeout exhaustion, etc).
    TempFail,
    /// Any other channel-specific failure.
    Other,
}

/// The subset of a `hostent` this crate needs: the resolved addresses
/// (possibly mixed families — an `INET` address can arrive in the
/// response to an `INET6` query) and an optional canonical name.
#[derive(Debug, Clone, Default)]
pub struct HostEnt {
    pub addresses: Vec<IpAddr>,
    pub canonical_name: Option<String>,
}

/// What a `DnsChannel` reports back through its completion closure.
#[derive(Debug, Clone)]
pub struct HostOutcome {
    pub status: HostStatus,
    /// Timeouts encountered while servicing this one lookup; accumulated
    /// by the caller into the request's running total.
    pub timeouts: u32,
    pub hostent: Option<HostEnt>,
}

/// The external, asynchronous DNS transport. A concrete implementation
/// may complete `callback` synchronously (before `resolve_host` returns)
/// or defer it arbitrarily; the state machine does not distinguish the
/// two, since it only ever reacts to the callback being invoked.
pub trait DnsChannel {
    fn resolve_host(&self, name: &str, family: Family, callback: Box<dyn FnOnce(HostOutcome)>);
}

/// Issue the `INET` host query.
pub(crate) fn resolve_host_inet(req: Box<Request>) {
    let channel = req.channel.clone();
    let name = req.node.clone().unwrap_or_default();
    channel.resolve_host(
        &name,
        Family::Inet,
        Box::new(move |outcome| host_callback(req, Family::Inet, outcome)),
    );
}

/// Issue the `INET6` host query.
pub(crate) fn resolve_host_inet6(req: Box<Request>) {
    let channel = req.channel.clone();
    let name = req.node.clone().unwrap_or_default();
    channel.resolve_host(
        &name,
        Family::Inet6,
        Box::new(move |outcome| host_callback(req, Family::Inet6, outcome)),
    );
}

/// Re-entered by the channel exactly once per `resolve_host` call.
fn host_callback(mut req: Box<Request>, requested: Family, outcome: HostOutcome) {
    req.timeouts += outcome.timeouts;

    if outcome.status != HostStatus::Success {
        if req.pending.intersects(Pending::HOST_INET | Pending::HOST_INET6) {
            // Try the other family.
            next_state(req);
            return;
        }
        req.fail(crate::error::GaiError::NoName);
        return;
    }

    let hostent = outcome.hostent.unwrap_or_default();

    let mut returned_inet = false;
    let mut returned_inet6 = false;
    for addr in &hostent.addresses {
        let family = Family::of(*addr);
        match family {
            Family::Inet => returned_inet = true,
            Family::Inet6 => returned_inet6 = true,
        }
        req.chain.prepend(AddrInfo::new(*addr, &req.hints));
    }

    // Clear the bit for the family that was *returned*, not the family
    // that was requested — a query issued for one family can come back
    // carrying the other.
    if returned_inet {
        req.pending.remove(Pending::HOST_INET);
    }
    if returned_inet6 {
        req.pending.remove(Pending::HOST_INET6);
    }
    // The query itself completed for `requested`; if nothing of that
    // family came back, the bit for it is still cleared once — this
    // query for `requested` has nothing more to offer.
    match requested {
        Family::Inet => req.pending.remove(Pending::HOST_INET),
        Family::Inet6 => req.pending.remove(Pending::HOST_INET6),
    }

    if requested == Family::Inet6
        && req.hints.family.is_inet6_only()
        && !req.hints.flags.contains(crate::hints::HintFlags::ALL)
    {
        // Caller asked for INET6 only, without AI_ALL: don't also query
        // INET.
        req.pending.remove(Pending::HOST_INET);
    }

    if req.pending.contains(Pending::CANONICAL) {
        if let Some(name) = hostent.canonical_name {
            if let Some(head) = req.chain.head_mut() {
                head.canonical_name = Some(name);
            }
        }
    }

    next_state(req);
}
