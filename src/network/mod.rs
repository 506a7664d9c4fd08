//! CIDR network blocks
//!
//! A [`Network`] is a base address masked down to its prefix length. Host bits
//! are cleared at construction, so `10.1.2.3/8` and `10.0.0.0/8` are the same
//! network.

use crate::address::Address;
use crate::error::NetworkError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod special;

pub use special::{is_special_use, SPECIAL_USE_BLOCKS};

/// Longest IPv4 prefix.
pub const MAX_PREFIX_LEN: u8 = 32;

/// Netmask with `prefix_len` leading one-bits. `prefix_len` must be at most 32.
const fn mask_for(prefix_len: u8) -> u32 {
    if prefix_len == 0 {
        0
    } else {
        u32::MAX << (MAX_PREFIX_LEN - prefix_len)
    }
}

/// Immutable CIDR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    address: Address,
    prefix_len: u8,
}

impl Network {
    /// Create a network, masking `address` down to the network base.
    pub fn new(address: Address, prefix_len: u8) -> Result<Self, NetworkError> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(NetworkError::InvalidPrefixLength(i64::from(prefix_len)));
        }
        Ok(Self::from_raw(address, prefix_len))
    }

    /// Unchecked constructor for prefixes already known to be in range.
    pub(crate) const fn from_raw(address: Address, prefix_len: u8) -> Self {
        Network {
            address: Address::from_bits(address.to_integer() & mask_for(prefix_len)),
            prefix_len,
        }
    }

    /// Network base address (host bits zero).
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Integer netmask.
    pub fn mask_bits(&self) -> u32 {
        mask_for(self.prefix_len)
    }

    /// Netmask in dotted form, e.g. `255.255.255.128` for a /25.
    pub fn mask(&self) -> Address {
        Address::from(self.mask_bits())
    }

    /// Complement of the netmask.
    pub fn wildcard(&self) -> Address {
        Address::from(!self.mask_bits())
    }

    /// Whether `address` lies inside this block.
    pub fn contains(&self, address: Address) -> bool {
        address.to_integer() & self.mask_bits() == self.address.to_integer()
    }

    pub fn broadcast_address(&self) -> Address {
        Address::from(self.address.to_integer() | !self.mask_bits())
    }

    /// First assignable host address.
    ///
    /// `None` for a /31, which has no usable host range of its own; a /32
    /// yields its only address.
    pub fn first_usable_address(&self) -> Option<Address> {
        match self.prefix_len {
            32 => Some(self.address),
            31 => None,
            _ => Some(Address::from(self.address.to_integer() + 1)),
        }
    }

    /// Last assignable host address, following the same /31 and /32 rules as
    /// [`Network::first_usable_address`].
    pub fn last_usable_address(&self) -> Option<Address> {
        match self.prefix_len {
            32 => Some(self.address),
            31 => None,
            _ => Some(Address::from(self.broadcast_address().to_integer() - 1)),
        }
    }

    /// Number of assignable hosts: 0 for a /31, 1 for a /32, otherwise the
    /// block size minus network and broadcast addresses.
    pub fn total_hosts(&self) -> u64 {
        match self.prefix_len {
            32 => 1,
            31 => 0,
            len => (1u64 << (MAX_PREFIX_LEN - len)) - 2,
        }
    }

    /// Split into the two halves one bit longer. A /32 cannot be split and
    /// yields nothing.
    pub fn subnets(&self) -> Vec<Network> {
        if self.prefix_len >= MAX_PREFIX_LEN {
            return Vec::new();
        }

        let child_len = self.prefix_len + 1;
        let upper_bit = 1u32 << (MAX_PREFIX_LEN - child_len);
        vec![
            Network::from_raw(self.address, child_len),
            Network::from_raw(Address::from(self.address.to_integer() | upper_bit), child_len),
        ]
    }

    /// `false` when the base address falls in a private or special-use block.
    pub fn is_public(&self) -> bool {
        !is_special_use(self.address)
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    /// Parse CIDR text such as `10.123.0.0/20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| NetworkError::Malformed(s.to_string()))?;

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetworkError::Malformed(s.to_string()));
        }
        // all digits, so parsing only fails on overflow
        let prefix_len = prefix.parse::<i64>().unwrap_or(i64::MAX);
        let prefix_len = u8::try_from(prefix_len)
            .ok()
            .filter(|len| *len <= MAX_PREFIX_LEN)
            .ok_or(NetworkError::InvalidPrefixLength(prefix_len))?;

        Network::new(Address::parse(addr)?, prefix_len)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use ipnetwork::Ipv4Network;
    use proptest::prelude::*;
    use std::net::Ipv4Addr;

    fn net(cidr: &str) -> Network {
        cidr.parse().unwrap()
    }

    #[test]
    fn test_create_masks_host_bits() {
        let network = Network::new(Address::new(172, 16, 128, 128), 17).unwrap();
        assert_eq!(network.address(), Address::new(172, 16, 128, 0));
        assert_eq!(network.prefix_len(), 17);
        assert_eq!(network.to_string(), "172.16.128.0/17");

        assert_eq!(
            Network::new(Address::new(255, 1, 1, 1), 17).unwrap(),
            Network::new(Address::new(255, 1, 0, 0), 17).unwrap()
        );
    }

    #[test]
    fn test_create_invalid_prefix() {
        assert_eq!(
            Network::new(Address::UNSPECIFIED, 33),
            Err(NetworkError::InvalidPrefixLength(33))
        );
        assert!(Network::new(Address::UNSPECIFIED, 0).is_ok());
        assert!(Network::new(Address::UNSPECIFIED, 32).is_ok());
    }

    #[test]
    fn test_parse_cidr() {
        assert_eq!(net("10.123.1.7/24").to_string(), "10.123.1.0/24");
        assert_eq!(
            "10.0.0.0".parse::<Network>(),
            Err(NetworkError::Malformed("10.0.0.0".to_string()))
        );
        assert_eq!(
            "10.0.0.0/-1".parse::<Network>(),
            Err(NetworkError::Malformed("10.0.0.0/-1".to_string()))
        );
        assert_eq!(
            "10.0.0.0/33".parse::<Network>(),
            Err(NetworkError::InvalidPrefixLength(33))
        );
        assert_eq!(
            "10.0.0.0/256".parse::<Network>(),
            Err(NetworkError::InvalidPrefixLength(256))
        );
        assert_eq!(
            "10.0.0.0/99999999999999999999".parse::<Network>(),
            Err(NetworkError::InvalidPrefixLength(i64::MAX))
        );
        assert_eq!(
            "10.0.0/8".parse::<Network>(),
            Err(NetworkError::Address(AddressError::Malformed(
                "10.0.0".to_string()
            )))
        );
    }

    #[test]
    fn test_mask_and_wildcard() {
        let network = net("172.16.128.128/25");
        assert_eq!(network.mask_bits(), 0xFFFF_FF80);
        assert_eq!(network.mask().to_string(), "255.255.255.128");
        assert_eq!(network.wildcard().to_string(), "0.0.0.127");

        assert_eq!(net("0.0.0.0/0").mask(), Address::UNSPECIFIED);
        assert_eq!(net("1.2.3.4/32").mask(), Address::BROADCAST);
    }

    #[test]
    fn test_contains() {
        let network = net("172.16.128.0/25");
        assert!(network.contains(Address::new(172, 16, 128, 0)));
        assert!(network.contains(Address::new(172, 16, 128, 127)));
        assert!(!network.contains(Address::new(172, 16, 128, 128)));
        assert!(!network.contains(Address::new(192, 168, 1, 128)));

        let everything = net("0.0.0.0/0");
        assert!(everything.contains(Address::UNSPECIFIED));
        assert!(everything.contains(Address::BROADCAST));
    }

    #[test]
    fn test_broadcast_address() {
        assert_eq!(
            net("192.168.255.128/25").broadcast_address(),
            Address::new(192, 168, 255, 255)
        );
        assert_eq!(
            net("10.0.0.0/8").broadcast_address(),
            Address::new(10, 255, 255, 255)
        );
        assert_eq!(
            net("10.1.1.1/32").broadcast_address(),
            Address::new(10, 1, 1, 1)
        );
    }

    #[test]
    fn test_usable_addresses() {
        let network = net("192.168.255.128/25");
        assert_eq!(
            network.first_usable_address(),
            Some(Address::new(192, 168, 255, 129))
        );
        assert_eq!(
            network.last_usable_address(),
            Some(Address::new(192, 168, 255, 254))
        );

        let p2p = net("10.0.0.2/31");
        assert_eq!(p2p.first_usable_address(), None);
        assert_eq!(p2p.last_usable_address(), None);

        let host = net("10.0.0.7/32");
        assert_eq!(host.first_usable_address(), Some(Address::new(10, 0, 0, 7)));
        assert_eq!(host.last_usable_address(), Some(Address::new(10, 0, 0, 7)));

        let everything = net("0.0.0.0/0");
        assert_eq!(everything.first_usable_address(), Some(Address::new(0, 0, 0, 1)));
        assert_eq!(
            everything.last_usable_address(),
            Some(Address::new(255, 255, 255, 254))
        );
    }

    #[test]
    fn test_total_hosts() {
        assert_eq!(net("0.0.0.0/0").total_hosts(), 4_294_967_294);
        assert_eq!(net("10.0.0.0/8").total_hosts(), 16_777_214);
        assert_eq!(net("10.0.0.0/24").total_hosts(), 254);
        assert_eq!(net("10.0.0.0/25").total_hosts(), 126);
        assert_eq!(net("10.0.0.0/30").total_hosts(), 2);
        assert_eq!(net("10.0.0.0/31").total_hosts(), 0);
        assert_eq!(net("10.0.0.0/32").total_hosts(), 1);
    }

    #[test]
    fn test_subnets() {
        let subnets = net("192.168.0.0/24").subnets();
        assert_eq!(subnets, vec![net("192.168.0.0/25"), net("192.168.0.128/25")]);

        let subnets = net("0.0.0.0/0").subnets();
        assert_eq!(subnets, vec![net("0.0.0.0/1"), net("128.0.0.0/1")]);

        let subnets = net("10.0.0.4/31").subnets();
        assert_eq!(subnets, vec![net("10.0.0.4/32"), net("10.0.0.5/32")]);

        assert!(net("10.0.0.4/32").subnets().is_empty());
    }

    #[test]
    fn test_is_public() {
        for cidr in [
            "10.0.0.0/8",
            "10.200.3.0/24",
            "127.0.0.1/32",
            "172.16.0.0/12",
            "172.31.255.0/24",
            "192.168.0.0/16",
            "192.168.1.0/24",
            "224.0.0.0/3",
            "240.0.0.0/4",
            "255.255.255.255/32",
        ] {
            assert!(!net(cidr).is_public(), "{} should not be public", cidr);
        }

        for cidr in ["8.8.8.8/32", "11.0.0.0/8", "172.32.0.0/16", "223.0.0.0/8"] {
            assert!(net(cidr).is_public(), "{} should be public", cidr);
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(net("10.0.0.1/8"), net("10.255.0.0/8"));
        assert_ne!(net("10.0.0.0/8"), net("10.0.0.0/9"));
    }

    fn network_strategy() -> impl Strategy<Value = Network> {
        (any::<u32>(), 0u8..=32u8)
            .prop_map(|(bits, len)| Network::new(Address::from(bits), len).unwrap())
    }

    proptest! {
        #[test]
        fn prop_host_bits_cleared(network in network_strategy()) {
            prop_assert_eq!(network.address().to_integer() & network.wildcard().to_integer(), 0);
        }

        #[test]
        fn prop_subnets_partition_parent(network in network_strategy().prop_filter("splittable", |n| n.prefix_len() < 32)) {
            let subnets = network.subnets();
            prop_assert_eq!(subnets.len(), 2);
            let (low, high) = (subnets[0], subnets[1]);

            prop_assert_eq!(low.prefix_len(), network.prefix_len() + 1);
            prop_assert_eq!(high.prefix_len(), network.prefix_len() + 1);
            // contiguous, no overlap, same outer bounds
            prop_assert_eq!(low.address(), network.address());
            prop_assert_eq!(low.broadcast_address().to_integer() + 1, high.address().to_integer());
            prop_assert_eq!(high.broadcast_address(), network.broadcast_address());
        }

        #[test]
        fn prop_matches_ipnetwork(bits in any::<u32>(), len in 0u8..=32u8, probe in any::<u32>()) {
            let ours = Network::new(Address::from(bits), len).unwrap();
            let oracle = Ipv4Network::new(Ipv4Addr::from(bits), len).unwrap();

            prop_assert_eq!(Ipv4Addr::from(ours.address()), oracle.network());
            prop_assert_eq!(Ipv4Addr::from(ours.broadcast_address()), oracle.broadcast());
            prop_assert_eq!(Ipv4Addr::from(ours.mask()), oracle.mask());
            prop_assert_eq!(
                ours.contains(Address::from(probe)),
                oracle.contains(Ipv4Addr::from(probe))
            );
        }
    }
}
