//! The layer abstraction: type tags, the shared layer object, and the two
//! layer variants every chain can produce regardless of registered protocols
//! (the verbatim payload layer and the failure layer).

use std::fmt;
use std::sync::Arc;

use crate::error::DecodeError;

/// Identifies the protocol of one decoded layer.
///
/// The numbering is open: protocol modules outside this crate mint their own
/// constants for the layers they produce. Only [`LayerType::DECODE_FAILURE`]
/// is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerType(pub u16);

impl LayerType {
    /// Reserved tag for the layer synthesized when decoding fails.
    pub const DECODE_FAILURE: LayerType = LayerType(0);
    /// An undecodable remainder carried verbatim.
    pub const PAYLOAD: LayerType = LayerType(1);
    pub const ETHERNET: LayerType = LayerType(2);
    pub const IPV4: LayerType = LayerType(3);
    pub const IPV6: LayerType = LayerType(4);
    pub const TCP: LayerType = LayerType(5);
    pub const UDP: LayerType = LayerType(6);

    /// Returns a human-readable name for the built-in tags.
    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::DECODE_FAILURE => "decode-failure",
            LayerType::PAYLOAD => "payload",
            LayerType::ETHERNET => "ethernet",
            LayerType::IPV4 => "ipv4",
            LayerType::IPV6 => "ipv6",
            LayerType::TCP => "tcp",
            LayerType::UDP => "udp",
            _ => "unknown",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            "unknown" => write!(f, "layer-{}", self.0),
            name => f.write_str(name),
        }
    }
}

/// One parsed protocol unit within a packet.
///
/// A layer only describes itself; decoding its payload into further layers is
/// the job of the next decoder in the chain, never the layer's. Payload spans
/// borrow from the buffer the packet was decoded from, so the borrow checker
/// keeps them from outliving it.
pub trait Layer<'a>: fmt::Debug + Send + Sync {
    /// The tag identifying this layer's protocol.
    fn layer_type(&self) -> LayerType;

    /// The bytes this layer carries: everything nested inside its header.
    fn payload(&self) -> &'a [u8];

    /// The failure encountered, for the error-layer variant only.
    fn error(&self) -> Option<&DecodeError> {
        None
    }
}

/// A layer as stored in the chain and the canonical slots.
///
/// Slots hold clones of the chain's `Arc`s, so a slot and its chain entry are
/// the same object, not merely equal ones.
pub type SharedLayer<'a> = Arc<dyn Layer<'a> + 'a>;

/// An undecodable remainder wrapped verbatim, ending useful structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a> {
    pub data: &'a [u8],
}

impl<'a> Layer<'a> for Payload<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::PAYLOAD
    }

    fn payload(&self) -> &'a [u8] {
        self.data
    }
}

/// The layer synthesized when a decoder reports failure.
///
/// Always the last layer of its chain; the bytes that failed to decode are
/// kept as the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure<'a> {
    data: &'a [u8],
    error: DecodeError,
}

impl<'a> DecodeFailure<'a> {
    pub(crate) fn new(data: &'a [u8], error: DecodeError) -> Self {
        DecodeFailure { data, error }
    }
}

impl<'a> Layer<'a> for DecodeFailure<'a> {
    fn layer_type(&self) -> LayerType {
        LayerType::DECODE_FAILURE
    }

    fn payload(&self) -> &'a [u8] {
        self.data
    }

    fn error(&self) -> Option<&DecodeError> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_type_names() {
        assert_eq!(LayerType::ETHERNET.as_str(), "ethernet");
        assert_eq!(LayerType::DECODE_FAILURE.as_str(), "decode-failure");
        assert_eq!(LayerType(999).as_str(), "unknown");
        assert_eq!(LayerType(999).to_string(), "layer-999");
        assert_eq!(LayerType::TCP.to_string(), "tcp");
    }

    #[test]
    fn test_payload_layer_carries_data_verbatim() {
        let data = [1u8, 2, 3];
        let layer = Payload { data: &data };
        assert_eq!(layer.layer_type(), LayerType::PAYLOAD);
        assert_eq!(layer.payload(), &data);
        assert!(layer.error().is_none());
    }

    #[test]
    fn test_failure_layer_exposes_its_error() {
        let data = [0u8; 4];
        let layer = DecodeFailure::new(&data, DecodeError::UnsupportedLinkType);
        assert_eq!(layer.layer_type(), LayerType::DECODE_FAILURE);
        assert_eq!(layer.payload(), &data);
        assert_eq!(layer.error(), Some(&DecodeError::UnsupportedLinkType));
    }
}
