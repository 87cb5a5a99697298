//! The hints record: caller-supplied flags, family restriction, socket
//! type and protocol narrowing a resolution.

use bitflags::bitflags;

bitflags! {
    /// Caller-supplied flags narrowing which resolutions to produce.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HintFlags: i32 {
        /// Address suitable for binding a listening socket (wildcard)
        /// rather than connecting.
        const PASSIVE     = libc::AI_PASSIVE;
        /// Request that a canonical name be surfaced on the head node.
        const CANONNAME   = libc::AI_CANONNAME;
        /// Forbid DNS lookups: the node must parse as a numeric literal.
        const NUMERICHOST = libc::AI_NUMERICHOST;
        /// Forbid the services database: the service must parse as an
        /// integer.
        const NUMERICSERV = libc::AI_NUMERICSERV;
        /// Return results for every address family `AI_V4MAPPED` would
        /// otherwise collapse into one.
        const ALL         = libc::AI_ALL;
        /// Accept IPv4-mapped IPv6 results.
        const V4MAPPED    = libc::AI_V4MAPPED;
        /// Only return addresses for families with a configured
        /// interface. Honoured only as a no-op: the bit round-trips but
        /// never changes resolution behaviour.
        const ADDRCONFIG  = libc::AI_ADDRCONFIG;
    }
}

/// The address family a caller narrows resolution to, or `Unspec` for
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyHint {
    #[default]
    Unspec,
    Inet,
    Inet6,
}

impl FamilyHint {
    /// Family condition for the `HOST_INET`/`NUMERIC_HOST_INET` bits:
    /// `UNSPEC`, `INET`, or `INET6` with `AI_V4MAPPED` set (the caller
    /// wants IPv4 results folded into the IPv6 family).
    pub(crate) fn wants_inet(self, flags: HintFlags) -> bool {
        match self {
            FamilyHint::Unspec | FamilyHint::Inet => true,
            FamilyHint::Inet6 => flags.contains(HintFlags::V4MAPPED),
        }
    }

    pub(crate) fn wants_inet6(self) -> bool {
        matches!(self, FamilyHint::Unspec | FamilyHint::Inet6)
    }

    pub(crate) fn is_inet6_only(self) -> bool {
        matches!(self, FamilyHint::Inet6)
    }
}

/// Options narrowing a [`crate::getaddrinfo`] call.
///
/// `Hints::default()` is the all-zero value: no flags, family
/// unspecified, socket type and protocol left to the caller/factory
/// defaulting in the service step. A call that omits hints entirely does
/// *not* use this value — see [`Hints::for_absent_hints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hints {
    pub flags: HintFlags,
    pub family: FamilyHint,
    /// 0 means "any"; otherwise a `libc::SOCK_*` value.
    pub socktype: i32,
    /// 0 means "any"; otherwise a `libc::IPPROTO_*` value.
    pub protocol: i32,
}

impl Hints {
    /// The hints a call uses when the caller passes no hints at all:
    /// family unspecified, `AI_V4MAPPED | AI_ADDRCONFIG`, socket type and
    /// protocol left to the service step. The C API's own `AI_DEFAULT`
    /// constant is `AI_V4MAPPED_CFG | AI_ADDRCONFIG`; this crate models
    /// the caller-visible `AI_V4MAPPED` bit rather than the separate
    /// internal `_CFG` variant, since it's the only public flag this
    /// crate tracks that the old config bit maps onto.
    pub(crate) fn for_absent_hints() -> Hints {
        Hints {
            flags: HintFlags::V4MAPPED | HintFlags::ADDRCONFIG,
            family: FamilyHint::Unspec,
            socktype: 0,
            protocol: 0,
        }
    }

    /// Validates the flag combinations that don't depend on node/service
    /// presence (those checks live in `request.rs`, where the node and
    /// service strings are in scope).
    pub(crate) fn bad_flags(&self) -> bool {
        self.flags.contains(HintFlags::ALL) && !self.flags.contains(HintFlags::V4MAPPED)
    }
}
