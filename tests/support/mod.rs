//! Mock external collaborators for integration tests: a scriptable
//! `DnsChannel` that can return per-family results or simulate a
//! failure, and a small in-memory protocols/services table.

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::IpAddr;

use gai::{DnsChannel, Family, HostEnt, HostOutcome, HostStatus, ProtocolDatabase, ServiceDatabase};

/// Installs `env_logger` once so `trace!`-level `next_state` output shows
/// up under `cargo test -- --nocapture` with `RUST_LOG=trace`; a second
/// call from another test is a harmless no-op.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// A per-family scripted host answer.
#[derive(Clone)]
pub struct HostAnswer {
    pub status: HostStatus,
    pub addresses: Vec<IpAddr>,
    pub canonical_name: Option<String>,
}

impl HostAnswer {
    pub fn not_found() -> Self {
        HostAnswer {
            status: HostStatus::NotFound,
            addresses: Vec::new(),
            canonical_name: None,
        }
    }

    pub fn success(addresses: Vec<IpAddr>) -> Self {
        HostAnswer {
            status: HostStatus::Success,
            addresses,
            canonical_name: None,
        }
    }

    pub fn with_canonical_name(mut self, name: impl Into<String>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }
}

/// A `DnsChannel` keyed on `(name, family)`, recording how many times
/// each key was queried.
#[derive(Default)]
pub struct MockChannel {
    answers: HashMap<(String, Family), HostAnswer>,
    calls: RefCell<Vec<(String, Family)>>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, name: &str, family: Family, answer: HostAnswer) -> Self {
        self.answers.insert((name.to_owned(), family), answer);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl DnsChannel for MockChannel {
    fn resolve_host(&self, name: &str, family: Family, callback: Box<dyn FnOnce(HostOutcome)>) {
        self.calls.borrow_mut().push((name.to_owned(), family));
        let answer = self
            .answers
            .get(&(name.to_owned(), family))
            .cloned()
            .unwrap_or_else(HostAnswer::not_found);

        let hostent = if answer.addresses.is_empty() && answer.canonical_name.is_none() {
            None
        } else {
            Some(HostEnt {
                addresses: answer.addresses,
                canonical_name: answer.canonical_name,
            })
        };

        callback(HostOutcome {
            status: answer.status,
            timeouts: 0,
            hostent,
        });
    }
}

/// A fixed protocols/services table: `tcp`=6, `udp`=17; `http`/`tcp`=80.
#[derive(Default)]
pub struct MockDb;

impl ProtocolDatabase for MockDb {
    fn name_by_number(&self, proto: i32) -> Option<String> {
        match proto {
            libc::IPPROTO_TCP => Some("tcp".to_owned()),
            libc::IPPROTO_UDP => Some("udp".to_owned()),
            _ => None,
        }
    }
}

impl ServiceDatabase for MockDb {
    fn port_by_name(&self, name: &str, proto_name: &str) -> Option<u16> {
        match (name, proto_name) {
            ("http", "tcp") => Some(80),
            ("echo", "udp") => Some(7),
            _ => None,
        }
    }
}
