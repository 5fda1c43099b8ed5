//! Ethernet link-layer decoder.

use std::sync::Arc;

use header_types::eth::{EtherType, MacAddr, ETHER_TYPE_OFFSET, ETH_LEN};
use tracing::debug;

use crate::decode::{decode_payload, DecodeResult, Decoded, DecoderFn, SpecificLayers};
use crate::error::DecodeError;
use crate::layer::{Layer, LayerType};
use crate::proto::ip;

/// The link layer of one Ethernet II frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetLayer<'a> {
    pub dst_addr: MacAddr,
    pub src_addr: MacAddr,
    /// Raw EtherType value, host byte order.
    pub ether_type: u16,
    payload: &'a [u8],
}

impl<'a> EthernetLayer<'a> {
    /// The EtherType as a known protocol, when it is one.
    pub fn ether_type_known(&self) -> Option<EtherType> {
        EtherType::try_from(self.ether_type).ok()
    }
}

impl<'a> Layer<'a> for EthernetLayer<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::ETHERNET
    }

    fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

fn parse_ethernet(data: &[u8]) -> Result<EthernetLayer<'_>, DecodeError> {
    if data.len() < ETH_LEN {
        return Err(DecodeError::Truncated {
            header: "ethernet",
            needed: ETH_LEN,
            available: data.len(),
        });
    }
    let mut dst_addr: MacAddr = [0; 6];
    dst_addr.copy_from_slice(&data[..6]);
    let mut src_addr: MacAddr = [0; 6];
    src_addr.copy_from_slice(&data[6..12]);
    Ok(EthernetLayer {
        dst_addr,
        src_addr,
        ether_type: u16::from_be_bytes([data[ETHER_TYPE_OFFSET], data[ETHER_TYPE_OFFSET + 1]]),
        payload: &data[ETH_LEN..],
    })
}

/// Decodes the 14-byte Ethernet header and routes IPv4/IPv6 payloads.
/// Everything else is handed to the payload decoder.
pub fn decode_ethernet<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let parsed = parse_ethernet(data)?;
    let rest = parsed.payload;

    let next: DecoderFn = match parsed.ether_type_known() {
        Some(EtherType::Ipv4) => ip::decode_ipv4,
        Some(EtherType::Ipv6) => ip::decode_ipv6,
        _ => {
            debug!(
                ether_type = parsed.ether_type,
                "no decoder for ether type, remainder is payload"
            );
            decode_payload
        }
    };

    let layer = Arc::new(parsed);
    specific.link = Some(layer.clone());
    Ok(Decoded {
        layer: Some(layer),
        next: Some(next),
        rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to build an Ethernet header followed by `payload` bytes.
    fn create_eth_test_packet(ether_type: u16, payload: &[u8]) -> Vec<u8> {
        let mut packet = Vec::new();
        // Destination MAC (ff:ff:ff:ff:ff:ff)
        packet.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        // Source MAC (00:11:22:33:44:55)
        packet.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        packet.extend_from_slice(&ether_type.to_be_bytes());
        packet.extend_from_slice(payload);
        packet
    }

    #[test]
    fn test_parse_ethernet_header() {
        let packet = create_eth_test_packet(0x0800, &[0xAA, 0xBB]);
        let parsed = parse_ethernet(&packet).expect("well-formed header");

        assert_eq!(parsed.dst_addr, [0xff; 6]);
        assert_eq!(parsed.src_addr, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert_eq!(parsed.ether_type, 0x0800);
        assert_eq!(parsed.ether_type_known(), Some(EtherType::Ipv4));
        assert_eq!(parsed.payload(), &[0xAA, 0xBB]);
        assert_eq!(parsed.layer_type(), LayerType::ETHERNET);
    }

    #[test]
    fn test_decode_ethernet_fills_link_slot() {
        let packet = create_eth_test_packet(0x0800, &[0xAA, 0xBB]);
        let mut specific = SpecificLayers::default();

        let decoded = decode_ethernet(&packet, &mut specific).expect("well-formed header");
        let layer = decoded.layer.expect("ethernet decoder produces a layer");

        assert_eq!(layer.layer_type(), LayerType::ETHERNET);
        assert_eq!(decoded.rest, &[0xAA, 0xBB]);
        assert!(decoded.next.is_some(), "ipv4 ether type routes onward");

        let link = specific.link.expect("link slot must be set");
        assert_eq!(link.layer_type(), LayerType::ETHERNET);
        assert_eq!(link.payload(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_decode_ethernet_truncated() {
        let mut specific = SpecificLayers::default();
        let result = decode_ethernet(&[0u8; 13], &mut specific);
        assert_eq!(
            result.err(),
            Some(DecodeError::Truncated {
                header: "ethernet",
                needed: ETH_LEN,
                available: 13,
            })
        );
        assert!(specific.link.is_none(), "no slot on failure");
    }

    #[test]
    fn test_decode_ethernet_unknown_type_routes_to_payload() {
        let packet = create_eth_test_packet(0x1234, &[1, 2, 3]);
        let mut specific = SpecificLayers::default();

        let decoded = decode_ethernet(&packet, &mut specific).unwrap();
        let next = decoded.next.expect("fallback decoder expected");
        let mut inner = SpecificLayers::default();
        let terminal = next(decoded.rest, &mut inner)
            .expect("payload decode cannot fail")
            .layer
            .unwrap();
        assert_eq!(terminal.layer_type(), LayerType::PAYLOAD);
        assert_eq!(terminal.payload(), &[1, 2, 3]);
    }
}
