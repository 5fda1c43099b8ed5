//! ## IP Headers
//!
//! IPv4 header, which is present after the Ethernet header.
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |ip_ver | h_len |  ip_dscp  |ecn|        ip_total_length        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       ip_identification       |flags|   ip_fragment_offset    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    ip_ttl     |  ip_protocol  |          ip_checksum          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         source_ipaddr                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                      destination_ipaddr                       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          ip_options                           |
//! /                              ...                              /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!
//! IPv6 header, which is present after the Ethernet header.
//!   0                   1                   2                   3
//!   0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |ip_ver |  ip_dscp  |ecn|             ip_flow_label             |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |       ip_payload_length       |ip_next_header | ip_hop_limit  |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                         source_ipaddr (16 octets)             |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                      destination_ipaddr (16 octets)           |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+

/// Protocol carried in the payload of an IP header, as assigned by IANA.
#[repr(u8)]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum IpProto {
    Icmp = 1,
    Tcp = 6,
    Udp = 17,
    Gre = 47,
    Icmpv6 = 58,
    Ipv6NoNxt = 59,
}

impl TryFrom<u8> for IpProto {
    type Error = u8; // Return the unknown value itself as the error

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(IpProto::Icmp),
            6 => Ok(IpProto::Tcp),
            17 => Ok(IpProto::Udp),
            47 => Ok(IpProto::Gre),
            58 => Ok(IpProto::Icmpv6),
            59 => Ok(IpProto::Ipv6NoNxt),
            _ => Err(value),
        }
    }
}

impl From<IpProto> for u8 {
    fn from(proto: IpProto) -> Self {
        proto as u8
    }
}

impl IpProto {
    /// Returns a human-readable string representation of the protocol.
    pub fn as_str(self) -> &'static str {
        match self {
            IpProto::Icmp => "icmp",
            IpProto::Tcp => "tcp",
            IpProto::Udp => "udp",
            IpProto::Gre => "gre",
            IpProto::Icmpv6 => "icmpv6",
            IpProto::Ipv6NoNxt => "ipv6-no-next",
        }
    }
}

pub mod ipv4 {
    /// The length of the IPv4 header without options.
    pub const IPV4_LEN: usize = 20;

    /// Returns the IP version field (should be 4).
    #[inline]
    pub fn version(vihl: u8) -> u8 {
        (vihl >> 4) & 0xF
    }

    /// Returns the IP header length in bytes.
    #[inline]
    pub fn ihl(vihl: u8) -> u8 {
        (vihl & 0xF) << 2
    }

    /// Returns the DSCP (Differentiated Services Code Point) field.
    #[inline]
    pub fn dscp(dscp_ecn: u8) -> u8 {
        (dscp_ecn >> 2) & 0x3F
    }

    /// Returns the ECN (Explicit Congestion Notification) field.
    #[inline]
    pub fn ecn(dscp_ecn: u8) -> u8 {
        dscp_ecn & 0x3
    }
}

pub mod ipv6 {
    /// The length of the IPv6 fixed header.
    pub const IPV6_LEN: usize = 40;

    /// Returns the IP version field (should be 6).
    #[inline]
    pub fn version(first: u8) -> u8 {
        (first >> 4) & 0xF
    }

    /// Returns the 20-bit flow label from the first four header bytes.
    #[inline]
    pub fn flow_label(first_word: [u8; 4]) -> u32 {
        u32::from_be_bytes(first_word) & 0x000F_FFFF
    }
}
