//! A protocol-agnostic, callback-driven implementation of the POSIX
//! `getaddrinfo` contract, modeled on `c-ares`'s `ares_getaddrinfo`: host
//! resolution goes out through an external, asynchronous [`DnsChannel`]
//! rather than talking DNS itself, and service-name lookups go through
//! external [`ProtocolDatabase`]/[`ServiceDatabase`] collaborators rather
//! than `/etc/services` directly (though file-backed defaults for all
//! three are available behind Cargo features).
//!
//! The crate has no executor and drives no I/O of its own: a request is
//! a plain owned value threaded through `FnOnce` continuations, advanced
//! one step at a time every time a sub-step (numeric parse, DNS
//! callback, canonical-name pass, service lookup) completes.

mod addrinfo;
mod canonical;
mod error;
mod hints;
mod host;
mod numeric;
mod request;
mod service;
mod state;
mod util;

#[cfg(any(feature = "default-hosts-channel", feature = "default-services-db"))]
mod defaults;

#[cfg(test)]
mod test_support;

pub use addrinfo::{AddrInfo, AddrInfoList, Family};
pub use error::GaiError;
pub use hints::{FamilyHint, HintFlags, Hints};
pub use host::{DnsChannel, HostEnt, HostOutcome, HostStatus};
pub use request::getaddrinfo;
pub use service::{ProtocolDatabase, ServiceDatabase};

#[cfg(feature = "default-hosts-channel")]
pub use defaults::HostsFileChannel;

#[cfg(feature = "default-services-db")]
pub use defaults::EtcServicesDb;
