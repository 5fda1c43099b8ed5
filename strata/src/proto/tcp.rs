//! TCP transport-layer decoder.

use std::sync::Arc;

use header_types::tcp::{self, DATA_OFFSET_OFFSET, FLAGS_OFFSET, TCP_LEN};

use crate::decode::{decode_payload, DecodeResult, Decoded, SpecificLayers};
use crate::error::DecodeError;
use crate::layer::{Layer, LayerType};

/// The transport layer of a TCP segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpLayer<'a> {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq: u32,
    pub ack: u32,
    /// Flag byte; test with the `TCP_FLAG_*` masks.
    pub flags: u8,
    pub window: u16,
    payload: &'a [u8],
}

impl<'a> Layer<'a> for TcpLayer<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::TCP
    }

    fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

fn parse_tcp(data: &[u8]) -> Result<TcpLayer<'_>, DecodeError> {
    if data.len() < TCP_LEN {
        return Err(DecodeError::Truncated {
            header: "tcp",
            needed: TCP_LEN,
            available: data.len(),
        });
    }
    let header_len = tcp::data_offset(data[DATA_OFFSET_OFFSET]) as usize;
    if header_len < TCP_LEN {
        return Err(DecodeError::Malformed {
            header: "tcp",
            reason: "data offset below minimum",
        });
    }
    if data.len() < header_len {
        return Err(DecodeError::Truncated {
            header: "tcp",
            needed: header_len,
            available: data.len(),
        });
    }
    Ok(TcpLayer {
        src_port: u16::from_be_bytes([data[0], data[1]]),
        dst_port: u16::from_be_bytes([data[2], data[3]]),
        seq: u32::from_be_bytes([data[4], data[5], data[6], data[7]]),
        ack: u32::from_be_bytes([data[8], data[9], data[10], data[11]]),
        flags: data[FLAGS_OFFSET],
        window: u16::from_be_bytes([data[14], data[15]]),
        payload: &data[header_len..],
    })
}

/// Decodes a TCP header (including options); whatever follows is the
/// application payload.
pub fn decode_tcp<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let parsed = parse_tcp(data)?;
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
    use header_types::tcp::{TCP_FLAG_ACK, TCP_FLAG_SYN};

    // Helper to build a TCP header followed by `payload` bytes.
    fn create_tcp_test_packet(payload: &[u8]) -> Vec<u8> {
        let mut packet = Vec::new();
        // Source Port (12345)
        packet.extend_from_slice(&[0x30, 0x39]);
        // Destination Port (80)
        packet.extend_from_slice(&[0x00, 0x50]);
        // Sequence Number
        packet.extend_from_slice(&[0x00, 0x00, 0x10, 0x00]);
        // Acknowledgment Number
        packet.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        // Data Offset (5), Reserved, Flags (SYN)
        packet.extend_from_slice(&[0x50, 0x02]);
        // Window Size
        packet.extend_from_slice(&[0x20, 0x00]);
        // Checksum
        packet.extend_from_slice(&[0x00, 0x00]);
        // Urgent Pointer
        packet.extend_from_slice(&[0x00, 0x00]);
        packet.extend_from_slice(payload);
        packet
    }

    #[test]
    fn test_parse_tcp_header() {
        let packet = create_tcp_test_packet(b"hello");
        let parsed = parse_tcp(&packet).expect("well-formed header");

        assert_eq!(parsed.src_port, 12345);
        assert_eq!(parsed.dst_port, 80);
        assert_eq!(parsed.seq, 0x1000);
        assert_eq!(parsed.ack, 0);
        assert_eq!(parsed.flags & TCP_FLAG_SYN, TCP_FLAG_SYN);
        assert_eq!(parsed.flags & TCP_FLAG_ACK, 0);
        assert_eq!(parsed.window, 0x2000);
        assert_eq!(parsed.payload(), b"hello");
    }

    #[test]
    fn test_parse_tcp_truncated() {
        let packet = create_tcp_test_packet(&[]);
        assert_eq!(
            parse_tcp(&packet[..10]).err(),
            Some(DecodeError::Truncated {
                header: "tcp",
                needed: TCP_LEN,
                available: 10,
            })
        );
    }

    #[test]
    fn test_parse_tcp_bad_data_offset() {
        let mut packet = create_tcp_test_packet(&[]);
        // Data offset 2 claims an 8-byte header, below the TCP minimum.
        packet[DATA_OFFSET_OFFSET] = 0x20;
        assert_eq!(
            parse_tcp(&packet).err(),
            Some(DecodeError::Malformed {
                header: "tcp",
                reason: "data offset below minimum",
            })
        );
    }

    #[test]
    fn test_decode_tcp_fills_transport_slot() {
        let packet = create_tcp_test_packet(b"data");
        let mut specific = SpecificLayers::default();
        let decoded = decode_tcp(&packet, &mut specific).unwrap();

        assert_eq!(decoded.rest, b"data");
        assert!(decoded.next.is_some(), "payload decoder follows tcp");
        let transport = specific.transport.expect("transport slot must be set");
        assert_eq!(transport.layer_type(), LayerType::TCP);
    }
}
