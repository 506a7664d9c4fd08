//! IPv4 address value type
//!
//! An [`Address`] is a 32-bit unsigned integer with a dotted-decimal text form.
//! Both forms are interchangeable and ordering is defined on the integer.

use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of dot-separated components in a dotted-decimal address.
const OCTETS: usize = 4;

/// Immutable IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);

impl Address {
    /// The lowest address, `0.0.0.0`.
    pub const UNSPECIFIED: Address = Address(0);
    /// The highest address, `255.255.255.255`.
    pub const BROADCAST: Address = Address(u32::MAX);

    /// Build an address from its four octets, most significant first.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address(u32::from_be_bytes([a, b, c, d]))
    }

    pub(crate) const fn from_bits(bits: u32) -> Self {
        Address(bits)
    }

    /// Parse strict dotted-decimal text (`a.b.c.d`, each component 0-255).
    ///
    /// Components are read as plain decimal, so `010` is ten. Signs, empty
    /// components, whitespace and anything other than ASCII digits are rejected.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let malformed = || AddressError::Malformed(text.to_string());

        let mut octets = [0u8; OCTETS];
        let mut count = 0;
        for component in text.split('.') {
            if count == OCTETS {
                return Err(malformed());
            }
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            // all digits, so the only possible failure is a value above 255
            octets[count] = component.parse::<u8>().map_err(|_| malformed())?;
            count += 1;
        }

        if count != OCTETS {
            return Err(malformed());
        }
        Ok(Address(u32::from_be_bytes(octets)))
    }

    /// Build an address from a signed integer, rejecting anything outside `0..=u32::MAX`.
    pub fn from_integer(value: i64) -> Result<Self, AddressError> {
        u32::try_from(value)
            .map(Address)
            .map_err(|_| AddressError::OutOfRange(value))
    }

    /// Integer form of the address.
    pub const fn to_integer(self) -> u32 {
        self.0
    }

    /// The four octets, most significant first.
    pub const fn octets(self) -> [u8; OCTETS] {
        self.0.to_be_bytes()
    }

    /// Address `offset` positions above this one.
    pub fn add(self, offset: u32) -> Result<Self, AddressError> {
        self.0
            .checked_add(offset)
            .map(Address)
            .ok_or(AddressError::OutOfRange(i64::from(self.0) + i64::from(offset)))
    }

    /// Address `offset` positions below this one.
    pub fn subtract(self, offset: u32) -> Result<Self, AddressError> {
        self.0
            .checked_sub(offset)
            .map(Address)
            .ok_or(AddressError::OutOfRange(i64::from(self.0) - i64::from(offset)))
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl TryFrom<i64> for Address {
    type Error = AddressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Address::from_integer(value)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
