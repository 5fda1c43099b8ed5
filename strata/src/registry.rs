//! Link types and the registry mapping them to first decoders.

use std::collections::HashMap;
use std::fmt;

use crate::decode::{decode_unknown, DecoderFn};
use crate::proto;

/// Link-layer framing of a raw buffer, numbered like the pcap link types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkType(pub u16);

impl LinkType {
    /// BSD loopback encapsulation.
    pub const NULL: LinkType = LinkType(0);
    /// Ethernet II frames.
    pub const ETHERNET: LinkType = LinkType(1);
    /// Raw IP, starting directly at the IP header.
    pub const RAW: LinkType = LinkType(101);

    /// Returns a human-readable name for the built-in link types.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::NULL => "null",
            LinkType::ETHERNET => "ethernet",
            LinkType::RAW => "raw-ip",
            _ => "unknown",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            "unknown" => write!(f, "linktype-{}", self.0),
            name => f.write_str(name),
        }
    }
}

/// Maps a link type to the decoder that starts a chain for it.
///
/// Build the registry before decoding anything; decoding only reads it, so a
/// finished registry can be shared behind `&` across any number of packets
/// and threads. Looking up a link type nobody registered is not an error: it
/// yields the decoder that reports the link type as unsupported.
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: HashMap<LinkType, DecoderFn>,
}

impl DecoderRegistry {
    /// An empty registry; every lookup resolves to the unsupported-link-type
    /// decoder until something is registered.
    pub fn new() -> Self {
        DecoderRegistry {
            decoders: HashMap::new(),
        }
    }

    /// A registry with the built-in protocol decoders registered.
    pub fn with_defaults() -> Self {
        let mut registry = DecoderRegistry::new();
        registry.register(LinkType::ETHERNET, proto::eth::decode_ethernet);
        registry.register(LinkType::RAW, proto::ip::decode_ip);
        registry
    }

    /// Adds or replaces the decoder starting a chain for `link_type`. The
    /// last registration for a given type wins.
    pub fn register(&mut self, link_type: LinkType, decoder: DecoderFn) {
        self.decoders.insert(link_type, decoder);
    }

    /// The decoder that starts a chain for `link_type`. Never fails.
    pub fn decoder_for(&self, link_type: LinkType) -> DecoderFn {
        self.decoders
            .get(&link_type)
            .copied()
            .unwrap_or(decode_unknown)
    }
}
