//! Ethernet header, which appears at the beginning of every Ethernet frame.
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                     destination_mac_addr                      |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  | destination_mac_addr (con't)  |        source_mac_addr        |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                    source_mac_addr (con't)                    |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |           eth_type            |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!
//! All values here are host byte order; decoders read the wire fields with
//! `from_be_bytes` before consulting them.

/// The length of the Ethernet header.
pub const ETH_LEN: usize = 14;

/// A MAC address as it appears on the wire.
pub type MacAddr = [u8; 6];

/// Byte offset of the EtherType field within the header.
pub const ETHER_TYPE_OFFSET: usize = 12;

/// Protocol which is encapsulated in the payload of the Ethernet frame.
/// These values represent the standard IEEE assigned protocol numbers.
#[repr(u16)]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum EtherType {
    Ipv4 = 0x0800,
    Arp = 0x0806,
    Ieee8021q = 0x8100,
    Ipv6 = 0x86DD,
    Ieee8021ad = 0x88A8,
}

// This allows converting a u16 value into an EtherType enum variant.
// This is useful when parsing headers.
impl TryFrom<u16> for EtherType {
    type Error = u16; // Return the unknown value itself as the error

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0800 => Ok(EtherType::Ipv4),
            0x0806 => Ok(EtherType::Arp),
            0x8100 => Ok(EtherType::Ieee8021q),
            0x86DD => Ok(EtherType::Ipv6),
            0x88A8 => Ok(EtherType::Ieee8021ad),
            _ => Err(value),
        }
    }
}

// This allows converting an EtherType enum variant back to its u16 representation.
// This is useful when constructing headers.
impl From<EtherType> for u16 {
    fn from(ether_type: EtherType) -> Self {
        ether_type as u16
    }
}

impl EtherType {
    /// Returns a human-readable string representation of the EtherType.
    pub fn as_str(self) -> &'static str {
        match self {
            EtherType::Ipv4 => "ipv4",
            EtherType::Arp => "arp",
            EtherType::Ieee8021q => "vlan",
            EtherType::Ipv6 => "ipv6",
            EtherType::Ieee8021ad => "qinq",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eth_hdr_len() {
        assert_eq!(ETH_LEN, 14);
        assert_eq!(ETH_LEN, 6 + 6 + 2);
    }

    #[test]
    fn test_ethertype_try_from_u16_known() {
        assert_eq!(EtherType::try_from(0x0800), Ok(EtherType::Ipv4));
        assert_eq!(EtherType::try_from(0x86DD), Ok(EtherType::Ipv6));
        assert_eq!(EtherType::try_from(0x0806), Ok(EtherType::Arp));
    }

    #[test]
    fn test_ethertype_try_from_u16_unknown() {
        assert_eq!(EtherType::try_from(0x1234), Err(0x1234));
    }

    #[test]
    fn test_u16_from_ethertype() {
        assert_eq!(u16::from(EtherType::Ipv4), 0x0800);
        assert_eq!(u16::from(EtherType::Arp), 0x0806);
        assert_eq!(u16::from(EtherType::Ipv6), 0x86DD);
    }

    #[test]
    fn test_ethertype_as_str() {
        assert_eq!(EtherType::Ipv4.as_str(), "ipv4");
        assert_eq!(EtherType::Arp.as_str(), "arp");
        assert_eq!(EtherType::Ieee8021q.as_str(), "vlan");
        assert_eq!(EtherType::Ipv6.as_str(), "ipv6");
        assert_eq!(EtherType::Ieee8021ad.as_str(), "qinq");
    }
}
