//! IPv4 and IPv6 network-layer decoders, plus the raw-IP entry point used
//! for link types that start directly at the IP header.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use header_types::ip::{ipv4, ipv6, IpProto};
use tracing::debug;

use crate::decode::{decode_payload, DecodeResult, Decoded, DecoderFn, SpecificLayers};
use crate::error::DecodeError;
use crate::layer::{Layer, LayerType};
use crate::proto::{tcp, udp};

/// The network layer of an IPv4 packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Layer<'a> {
    pub src_addr: Ipv4Addr,
    pub dst_addr: Ipv4Addr,
    /// Raw protocol number, host byte order.
    pub protocol: u8,
    pub ttl: u8,
    pub dscp: u8,
    pub ecn: u8,
    payload: &'a [u8],
}

impl<'a> Layer<'a> for Ipv4Layer<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::IPV4
    }

    fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

/// The network layer of an IPv6 packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Layer<'a> {
    pub src_addr: Ipv6Addr,
    pub dst_addr: Ipv6Addr,
    /// Raw next-header number, host byte order.
    pub next_header: u8,
    pub hop_limit: u8,
    pub flow_label: u32,
    payload: &'a [u8],
}

impl<'a> Layer<'a> for Ipv6Layer<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::IPV6
    }

    fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

fn parse_ipv4(data: &[u8]) -> Result<Ipv4Layer<'_>, DecodeError> {
    if data.len() < ipv4::IPV4_LEN {
        return Err(DecodeError::Truncated {
            header: "ipv4",
            needed: ipv4::IPV4_LEN,
            available: data.len(),
        });
    }
    let vihl = data[0];
    if ipv4::version(vihl) != 4 {
        return Err(DecodeError::Malformed {
            header: "ipv4",
            reason: "version field is not 4",
        });
    }
    let header_len = ipv4::ihl(vihl) as usize;
    if header_len < ipv4::IPV4_LEN {
        return Err(DecodeError::Malformed {
            header: "ipv4",
            reason: "header length below minimum",
        });
    }
    if data.len() < header_len {
        return Err(DecodeError::Truncated {
            header: "ipv4",
            needed: header_len,
            available: data.len(),
        });
    }
    Ok(Ipv4Layer {
        src_addr: Ipv4Addr::new(data[12], data[13], data[14], data[15]),
        dst_addr: Ipv4Addr::new(data[16], data[17], data[18], data[19]),
        protocol: data[9],
        ttl: data[8],
        dscp: ipv4::dscp(data[1]),
        ecn: ipv4::ecn(data[1]),
        payload: &data[header_len..],
    })
}

fn parse_ipv6(data: &[u8]) -> Result<Ipv6Layer<'_>, DecodeError> {
    if data.len() < ipv6::IPV6_LEN {
        return Err(DecodeError::Truncated {
            header: "ipv6",
            needed: ipv6::IPV6_LEN,
            available: data.len(),
        });
    }
    if ipv6::version(data[0]) != 6 {
        return Err(DecodeError::Malformed {
            header: "ipv6",
            reason: "version field is not 6",
        });
    }
    let mut src = [0u8; 16];
    src.copy_from_slice(&data[8..24]);
    let mut dst = [0u8; 16];
    dst.copy_from_slice(&data[24..40]);
    Ok(Ipv6Layer {
        src_addr: Ipv6Addr::from(src),
        dst_addr: Ipv6Addr::from(dst),
        next_header: data[6],
        hop_limit: data[7],
        flow_label: ipv6::flow_label([data[0], data[1], data[2], data[3]]),
        payload: &data[ipv6::IPV6_LEN..],
    })
}

fn transport_decoder(protocol: u8) -> Option<DecoderFn> {
    match IpProto::try_from(protocol) {
        Ok(IpProto::Tcp) => Some(tcp::decode_tcp),
        Ok(IpProto::Udp) => Some(udp::decode_udp),
        Ok(IpProto::Ipv6NoNxt) => None,
        _ => {
            debug!(protocol, "no decoder for ip protocol, remainder is payload");
            Some(decode_payload)
        }
    }
}

/// Decodes an IPv4 header (including options) and routes TCP/UDP payloads.
pub fn decode_ipv4<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let parsed = parse_ipv4(data)?;
    let rest = parsed.payload;
    let next = transport_decoder(parsed.protocol);

    let layer = Arc::new(parsed);
    specific.network = Some(layer.clone());
    Ok(Decoded {
        layer: Some(layer),
        next,
        rest,
    })
}

/// Decodes the fixed IPv6 header and routes TCP/UDP payloads. A `NoNxt`
/// next-header ends the chain without a payload layer.
pub fn decode_ipv6<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let parsed = parse_ipv6(data)?;
    let rest = parsed.payload;
    let next = transport_decoder(parsed.next_header);

    let layer = Arc::new(parsed);
    specific.network = Some(layer.clone());
    Ok(Decoded {
        layer: Some(layer),
        next,
        rest,
    })
}

/// Decoder for raw-IP link types: routes on the version nibble of the first
/// byte.
pub fn decode_ip<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let Some(&first) = data.first() else {
        return Err(DecodeError::Truncated {
            header: "ip",
            needed: 1,
            available: 0,
        });
    };
    match first >> 4 {
        4 => decode_ipv4(data, specific),
        6 => decode_ipv6(data, specific),
        _ => Err(DecodeError::Malformed {
            header: "ip",
            reason: "unrecognized ip version",
        }),
    }
}
