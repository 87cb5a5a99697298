//! The numeric host parsers, `try_pton_inet` and `try_pton_inet6`.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::addrinfo::AddrInfo;
use crate::hints::HintFlags;
use crate::request::Request;
use crate::state::Pending;

/// Attempt the `INET` numeric step. Never an error in practice (parse
/// failure just means "not numeric", not a fault) — returns so that
/// `next_state` can always re-enter afterwards.
pub(crate) fn try_pton_inet(req: &mut Request) {
    if let Some(node) = req.node.as_deref() {
        match node.parse::<Ipv4Addr>() {
            Ok(addr) => {
                let mut info = AddrInfo::new(addr.into(), &req.hints);
                if req.hints.flags.contains(HintFlags::CANONNAME) {
                    info.canonical_name = Some(node.to_owned());
                }
                req.chain.prepend(info);
                // A literal resolved; no DNS query is needed for either
                // family.
                req.pending.remove(Pending::HOST_INET | Pending::HOST_INET6);
            }
            Err(_) => {
                // Not numeric. Leave HOST_INET set so DNS gets a chance.
            }
        }
    } else {
        let addr = if req.hints.flags.contains(HintFlags::PASSIVE) {
            Ipv4Addr::UNSPECIFIED
        } else {
            Ipv4Addr::LOCALHOST
        };
        req.chain.prepend(AddrInfo::new(addr.into(), &req.hints));
        req.pending.remove(Pending::HOST_INET | Pending::HOST_INET6);
    }
}

/// Attempt the `INET6` numeric step.
///
/// An IPv4 literal queried against family `INET6` with `AI_V4MAPPED` set
/// is not synthesized into a `::ffff:a.b.c.d` node — an IPv4-shaped
/// string simply fails to parse as `Ipv6Addr` and falls through like any
/// other non-numeric input. See DESIGN.md for the reasoning.
pub(crate) fn try_pton_inet6(req: &mut Request) {
    if let Some(node) = req.node.as_deref() {
        match node.parse::<Ipv6Addr>() {
            Ok(addr) => {
                let mut info = AddrInfo::new(addr.into(), &req.hints);
                if req.hints.flags.contains(HintFlags::CANONNAME) {
                    info.canonical_name = Some(node.to_owned());
                }
                req.chain.prepend(info);
                req.pending.remove(Pending::HOST_INET | Pending::HOST_INET6);
            }
            Err(_) => {}
        }
    } else {
        let addr = if req.hints.flags.contains(HintFlags::PASSIVE) {
            Ipv6Addr::UNSPECIFIED
        } else {
            Ipv6Addr::LOCALHOST
        };
        req.chain.prepend(AddrInfo::new(addr.into(), &req.hints));
        req.pending.remove(Pending::HOST_INET | Pending::HOST_INET6);
    }
}
