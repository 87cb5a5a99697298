//! Default, file-backed implementations of the three external
//! collaborators, for embedders that don't already have their own DNS
//! transport or services database. Gated behind Cargo features so a
//! sandboxed embedder can depend on just the state machine and traits.
//!
//! A synchronous hosts-file scan and a services-file scan with alias
//! matching, in the style of the usual Unix resolver libraries — this
//! crate has no I/O driver of its own to read files asynchronously with.

use std::fs;
use std::net::IpAddr;

use crate::addrinfo::Family;
use crate::host::{DnsChannel, HostEnt, HostOutcome, HostStatus};
use crate::service::{ProtocolDatabase, ServiceDatabase};
use crate::util::{is_whitespace, remove_comment};

/// A `DnsChannel` that resolves entirely out of `/etc/hosts`, completing
/// synchronously. Does not consult `/etc/resolv.conf` or speak the DNS
/// wire protocol — that transport is this crate's out-of-scope external
/// collaborator; this is a usable stand-in for tests and for embedders
/// with no network access.
#[cfg(feature = "default-hosts-channel")]
#[derive(Debug, Default)]
pub struct HostsFileChannel {
    path: Option<String>,
}

#[cfg(feature = "default-hosts-channel")]
impl HostsFileChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the hosts file path (for tests).
    pub fn with_path(path: impl Into<String>) -> Self {
        HostsFileChannel {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> &str {
        self.path.as_deref().unwrap_or("/etc/hosts")
    }

    fn lookup(&self, name: &str, family: Family) -> HostEnt {
        let mut ent = HostEnt::default();
        let Ok(contents) = fs::read_to_string(self.path()) else {
            return ent;
        };

        for line in contents.lines() {
            let line = remove_comment(line.as_bytes());
            let mut columns = line
                .split(is_whitespace)
                .filter(|c| !c.is_empty());
            let Some(addr) = columns.next() else { continue };
            let Ok(addr) = std::str::from_utf8(addr) else { continue };
            let Some(addr) = addr.parse::<IpAddr>().ok() else { continue };
            if Family::of(addr) != family {
                continue;
            }
            for hostname in columns {
                if hostname == name.as_bytes() {
                    ent.addresses.push(addr);
                    if ent.canonical_name.is_none() {
                        ent.canonical_name = Some(name.to_owned());
                    }
                }
            }
        }
        ent
    }
}

#[cfg(feature = "default-hosts-channel")]
impl DnsChannel for HostsFileChannel {
    fn resolve_host(&self, name: &str, family: Family, callback: Box<dyn FnOnce(HostOutcome)>) {
        let ent = self.lookup(name, family);
        let status = if ent.addresses.is_empty() {
            HostStatus::NotFound
        } else {
            HostStatus::Success
        };
        callback(HostOutcome {
            status,
            timeouts: 0,
            hostent: Some(ent),
        });
    }
}

/// A `ProtocolDatabase`/`ServiceDatabase` backed by `/etc/protocols` and
/// `/etc/services`.
#[cfg(feature = "default-services-db")]
#[derive(Debug, Default)]
pub struct EtcServicesDb {
    protocols_path: Option<String>,
    services_path: Option<String>,
}

#[cfg(feature = "default-services-db")]
impl EtcServicesDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(protocols_path: impl Into<String>, services_path: impl Into<String>) -> Self {
        EtcServicesDb {
            protocols_path: Some(protocols_path.into()),
            services_path: Some(services_path.into()),
        }
    }

    fn protocols_path(&self) -> &str {
        self.protocols_path.as_deref().unwrap_or("/etc/protocols")
    }

    fn services_path(&self) -> &str {
        self.services_path.as_deref().unwrap_or("/etc/services")
    }
}

#[cfg(feature = "default-services-db")]
impl ProtocolDatabase for EtcServicesDb {
    fn name_by_number(&self, proto: i32) -> Option<String> {
        let contents = fs::read_to_string(self.protocols_path()).ok()?;
        for line in contents.lines() {
            let line = remove_comment(line.as_bytes());
            let mut columns = line.split(is_whitespace).filter(|c| !c.is_empty());
            let name = columns.next()?;
            let number = columns.next()?;
            let number: i32 = std::str::from_utf8(number).ok()?.parse().ok()?;
            if number == proto {
                return std::str::from_utf8(name).ok().map(str::to_owned);
            }
        }
        None
    }
}

#[cfg(feature = "default-services-db")]
impl ServiceDatabase for EtcServicesDb {
    fn port_by_name(&self, name: &str, proto_name: &str) -> Option<u16> {
        let contents = fs::read_to_string(self.services_path()).ok()?;
        for line in contents.lines() {
            if let Some(port) = parse_services_line(line.as_bytes(), name, proto_name) {
                return Some(port);
            }
        }
        None
    }
}

/// `/etc/services` line format: `<name> <port>/<proto> [aliases...]
/// [# comment]`.
#[cfg(feature = "default-services-db")]
fn parse_services_line(line: &[u8], name: &str, proto_name: &str) -> Option<u16> {
    let line = remove_comment(line);
    let mut columns = line.split(is_whitespace).filter(|c| !c.is_empty());
    let serv = columns.next()?;
    let info = columns.next()?;
    let mut info = info.split(|c| *c == b'/');
    let port = info.next()?;
    let proto = info.next()?;

    if proto != proto_name.as_bytes() {
        return None;
    }

    let found_name = serv == name.as_bytes();
    let found_alias = columns.any(|alias| alias == name.as_bytes());
    if !(found_name || found_alias) {
        return None;
    }

    std::str::from_utf8(port).ok()?.parse().ok()
}
