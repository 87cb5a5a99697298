//! The state machine, `next_state`.

use bitflags::bitflags;
use log::trace;

use crate::canonical::find_canonical;
use crate::error::GaiError;
use crate::host::{resolve_host_inet, resolve_host_inet6};
use crate::hints::HintFlags;
use crate::numeric::{try_pton_inet, try_pton_inet6};
use crate::request::Request;
use crate::service::{resolve_serv, try_serv_strtol};

bitflags! {
    /// Independent bits of outstanding work. Each bit has at most one
    /// clear transition per request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pending: u16 {
        const SERV               = 1 << 0;
        const NUMERIC_SERV       = 1 << 1;
        const HOST_INET          = 1 << 2;
        const HOST_INET6         = 1 << 3;
        const NUMERIC_HOST_INET  = 1 << 4;
        const NUMERIC_HOST_INET6 = 1 << 5;
        const CANONICAL          = 1 << 6;
    }
}

/// Re-entered by every step, synchronous or callback-driven. Evaluates
/// the bitmask in a fixed priority: all host work (numeric and DNS)
/// completes before any service work, so the service step can iterate
/// every existing result node to stamp ports.
pub(crate) fn next_state(mut req: Box<Request>) {
    trace!("next_state: pending={:?}", req.pending);

    if req.pending.contains(Pending::NUMERIC_HOST_INET6) {
        req.pending.remove(Pending::NUMERIC_HOST_INET6);
        try_pton_inet6(&mut req);
        next_state(req);
        return;
    }

    if req.pending.contains(Pending::NUMERIC_HOST_INET) {
        req.pending.remove(Pending::NUMERIC_HOST_INET);
        try_pton_inet(&mut req);
        next_state(req);
        return;
    }

    if req.pending.intersects(Pending::HOST_INET | Pending::HOST_INET6)
        && req.hints.flags.contains(HintFlags::NUMERICHOST)
    {
        req.fail(GaiError::NoName);
        return;
    }

    if req.pending.contains(Pending::HOST_INET6) {
        req.pending.remove(Pending::HOST_INET6);
        resolve_host_inet6(req);
        return;
    }

    if req.pending.contains(Pending::HOST_INET) {
        req.pending.remove(Pending::HOST_INET);
        resolve_host_inet(req);
        return;
    }

    if req.pending.contains(Pending::CANONICAL) {
        req.pending.remove(Pending::CANONICAL);
        find_canonical(req);
        return;
    }

    if req.pending.contains(Pending::NUMERIC_SERV) {
        req.pending.remove(Pending::NUMERIC_SERV);
        try_serv_strtol(req);
        return;
    }

    if req.pending.contains(Pending::SERV) && req.hints.flags.contains(HintFlags::NUMERICSERV) {
        req.fail(GaiError::NoName);
        return;
    }

    if req.pending.contains(Pending::SERV) {
        req.pending.remove(Pending::SERV);
        resolve_serv(req);
        return;
    }

    if req.pending.is_empty() {
        req.succeed();
        return;
    }

    // Unreachable given correct bit derivation in request.rs.
    req.fail(GaiError::FormErr);
}
