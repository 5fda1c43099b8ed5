//! UDP transport-layer decoder.

use std::sync::Arc;

use header_types::udp::{LENGTH_OFFSET, UDP_LEN};

use crate::decode::{decode_payload, DecodeResult, Decoded, SpecificLayers};
use crate::error::DecodeError;
use crate::layer::{Layer, LayerType};

/// The transport layer of a UDP datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpLayer<'a> {
    pub src_port: u16,
    pub dst_port: u16,
    /// PDU length as claimed by the header, including the header itself.
    pub length: u16,
    payload: &'a [u8],
}

impl<'a> Layer<'a> for UdpLayer<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::UDP
    }

    fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

fn parse_udp(data: &[u8]) -> Result<UdpLayer<'_>, DecodeError> {
    if data.len() < UDP_LEN {
        return Err(DecodeError::Truncated {
            header: "udp",
            needed: UDP_LEN,
            available: data.len(),
        });
    }
    Ok(UdpLayer {
        src_port: u16::from_be_bytes([data[0], data[1]]),
        dst_port: u16::from_be_bytes([data[2], data[3]]),
        length: u16::from_be_bytes([data[LENGTH_OFFSET], data[LENGTH_OFFSET + 1]]),
        payload: &data[UDP_LEN..],
    })
}

/// Decodes the 8-byte UDP header; whatever follows is the application
/// payload.
pub fn decode_udp<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let parsed = parse_udp(data)?;
    let rest = parsed.payload;

    let layer = Arc::new(parsed);
    specific.transport = Some(layer.clone());
    Ok(Decoded {
        layer: Some(layer),
        next: Some(decode_payload),
        rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to build a UDP header followed by `payload` bytes.
    fn create_udp_test_packet(payload: &[u8]) -> Vec<u8> {
        let mut packet = Vec::new();
        // Source Port (12345)
        packet.extend_from_slice(&[0x30, 0x39]);
        // Destination Port (53)
        packet.extend_from_slice(&[0x00, 0x35]);
        // Length (header plus payload)
        packet.extend_from_slice(&((UDP_LEN + payload.len()) as u16).to_be_bytes());
        // Checksum
        packet.extend_from_slice(&[0x00, 0x00]);
        packet.extend_from_slice(payload);
        packet
    }

    #[test]
    fn test_parse_udp_header() {
        let packet = create_udp_test_packet(b"query");
        let parsed = parse_udp(&packet).expect("well-formed header");

        assert_eq!(parsed.src_port, 12345);
        assert_eq!(parsed.dst_port, 53);
        assert_eq!(parsed.length as usize, UDP_LEN + 5);
        assert_eq!(parsed.payload(), b"query");
    }

    #[test]
    fn test_parse_udp_truncated() {
        assert_eq!(
            parse_udp(&[0u8; 7]).err(),
            Some(DecodeError::Truncated {
                header: "udp",
                needed: UDP_LEN,
                available: 7,
            })
        );
    }

    #[test]
    fn test_decode_udp_fills_transport_slot() {
        let packet = create_udp_test_packet(b"dns");
        let mut specific = SpecificLayers::default();
        let decoded = decode_udp(&packet, &mut specific).unwrap();

        assert_eq!(decoded.rest, b"dns");
        assert!(decoded.next.is_some(), "payload decoder follows udp");
        let transport = specific.transport.expect("transport slot must be set");
        assert_eq!(transport.layer_type(), LayerType::UDP);
    }
}
