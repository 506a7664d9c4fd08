//! Private and special-use IPv4 blocks
//!
//! The table is a `static` built from `const` constructors, so it is fully
//! initialised before any code runs and is never written afterwards.

use crate::address::Address;
use crate::network::Network;

/// Blocks that classify a network as non-public.
pub static SPECIAL_USE_BLOCKS: [Network; 5] = [
    // RFC 1918
    Network::from_raw(Address::new(10, 0, 0, 0), 8),
    // loopback
    Network::from_raw(Address::new(127, 0, 0, 0), 8),
    // RFC 1918
    Network::from_raw(Address::new(172, 16, 0, 0), 12),
    // RFC 1918
    Network::from_raw(Address::new(192, 168, 0, 0), 16),
    // multicast and class E reserved
    Network::from_raw(Address::new(224, 0, 0, 0), 3),
];

/// Whether `address` falls inside any special-use block.
pub fn is_special_use(address: Address) -> bool {
    SPECIAL_USE_BLOCKS
        .iter()
        .any(|block| block.contains(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_are_canonical() {
        for block in SPECIAL_USE_BLOCKS.iter() {
            assert_eq!(
                block.address().to_integer() & !block.mask_bits(),
                0,
                "{} has host bits set",
                block
            );
        }
        assert_eq!(SPECIAL_USE_BLOCKS[4].to_string(), "224.0.0.0/3");
    }

    #[test]
    fn test_is_special_use_edges() {
        assert!(!is_special_use(Address::new(9, 255, 255, 255)));
        assert!(is_special_use(Address::new(10, 0, 0, 0)));
        assert!(is_special_use(Address::new(10, 255, 255, 255)));
        assert!(!is_special_use(Address::new(11, 0, 0, 0)));

        assert!(!is_special_use(Address::new(172, 15, 255, 255)));
        assert!(is_special_use(Address::new(172, 31, 255, 255)));
        assert!(!is_special_use(Address::new(172, 32, 0, 0)));

        assert!(!is_special_use(Address::new(223, 255, 255, 255)));
        assert!(is_special_use(Address::new(224, 0, 0, 0)));
        assert!(is_special_use(Address::BROADCAST));
    }
}
