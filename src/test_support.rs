//! Minimal collaborator stand-ins for unit tests that only exercise
//! synchronous validation paths and never expect a query to actually go
//! out. Integration tests exercising the full state machine use the
//! richer mock channel in `tests/support.rs` instead.

use crate::addrinfo::Family;
use crate::host::{DnsChannel, HostOutcome, HostStatus};
use crate::service::{ProtocolDatabase, ServiceDatabase};

/// A `DnsChannel` that always reports `NotFound`. Never valid to reach
/// from the tests that use it (they fail before any query is issued);
/// its presence only satisfies `getaddrinfo`'s non-nullable channel
/// parameter.
pub(crate) struct EmptyChannel;

impl DnsChannel for EmptyChannel {
    fn resolve_host(&self, _name: &str, _family: Family, callback: Box<dyn FnOnce(HostOutcome)>) {
        callback(HostOutcome {
            status: HostStatus::NotFound,
            timeouts: 0,
            hostent: None,
        });
    }
}

/// A protocols/services database with no entries.
pub(crate) struct EmptyDb;

impl ProtocolDatabase for EmptyDb {
    fn name_by_number(&self, _proto: i32) -> Option<String> {
        None
    }
}

impl ServiceDatabase for EmptyDb {
    fn port_by_name(&self, _name: &str, _proto_name: &str) -> Option<u16> {
        None
    }
}
