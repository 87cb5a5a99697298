//! The service resolver.
//!
//! `ProtocolDatabase` and `ServiceDatabase` stand in for the services and
//! protocols database lookups (synchronous, thread-safe or serialised by
//! the caller). Default, file-backed implementations live in
//! `defaults.rs`.
//!
//! Port values here are plain host-order `u16`s, the way `std::net::
//! SocketAddr` represents them. The C API's `sockaddr_in.sin_port` field
//! expects a looked-up port already in network byte order; `SocketAddr`
//! has no such field to stamp directly, so there is nothing to
//! byte-swap at this layer — the conversion belongs at the (out-of-scope)
//! socket syscall boundary.

use crate::addrinfo::Family;
use crate::error::GaiError;
use crate::request::Request;
use crate::state::{next_state, Pending};

/// Stands in for `getprotobynumber_r`.
pub trait ProtocolDatabase {
    /// The canonical name of the protocol numbered `proto` (e.g. `"tcp"`
    /// for `libc::IPPROTO_TCP`), or `None` if unknown.
    fn name_by_number(&self, proto: i32) -> Option<String>;
}

/// Stands in for `getservbyname_r`.
pub trait ServiceDatabase {
    /// The port for `name` under `proto_name` (e.g. `"http"`/`"tcp"`).
    fn port_by_name(&self, name: &str, proto_name: &str) -> Option<u16>;
}

/// Socket-type/protocol defaulting, run by both service sub-steps before
/// they touch ports.
fn default_socktype_and_protocol(req: &mut Request) -> Result<(), GaiError> {
    for node in req.chain.iter_mut() {
        if node.socktype == 0 {
            node.socktype = match node.family {
                Family::Inet | Family::Inet6 => libc::SOCK_STREAM,
            };
        }
        if node.protocol == 0 {
            node.protocol = match (node.family, node.socktype) {
                (Family::Inet | Family::Inet6, libc::SOCK_STREAM) => libc::IPPROTO_TCP,
                (Family::Inet | Family::Inet6, libc::SOCK_DGRAM) => libc::IPPROTO_UDP,
                (Family::Inet | Family::Inet6, libc::SOCK_RAW) => libc::IPPROTO_RAW,
                (Family::Inet | Family::Inet6, libc::SOCK_SEQPACKET) => libc::IPPROTO_SCTP,
                _ => return Err(GaiError::BadFamily),
            };
        }
    }
    Ok(())
}

/// Attempt to parse the service as a base-10 integer consuming the whole
/// string.
pub(crate) fn try_serv_strtol(mut req: Box<Request>) {
    let service = req.service.clone().unwrap_or_default();
    let is_whole_number = !service.is_empty() && service.bytes().all(|b| b.is_ascii_digit());

    if is_whole_number {
        if let Ok(port) = service.parse::<u16>() {
            if let Err(e) = default_socktype_and_protocol(&mut req) {
                req.fail(e);
                return;
            }
            for node in req.chain.iter_mut() {
                node.sockaddr.set_port(port);
            }
            req.pending.remove(Pending::SERV);
        }
    }
    // Not a whole-string integer (or out of u16 range): fall through to
    // the symbolic step, leaving SERV set.

    next_state(req);
}

/// Symbolic service lookup via the services/protocols database.
pub(crate) fn resolve_serv(mut req: Box<Request>) {
    if let Err(e) = default_socktype_and_protocol(&mut req) {
        req.fail(e);
        return;
    }

    let service = req.service.clone().unwrap_or_default();
    let protocols = req.protocols.clone();
    let services = req.services.clone();

    let mut ports = Vec::with_capacity(req.chain.len());
    for node in req.chain.iter() {
        let Some(proto_name) = protocols.name_by_number(node.protocol) else {
            req.fail(GaiError::BadHints);
            return;
        };
        let Some(port) = services.port_by_name(&service, &proto_name) else {
            req.fail(GaiError::NoName);
            return;
        };
        ports.push(port);
    }

    for (node, port) in req.chain.iter_mut().zip(ports) {
        node.sockaddr.set_port(port);
    }

    req.pending.remove(Pending::SERV);
    next_state(req);
}
