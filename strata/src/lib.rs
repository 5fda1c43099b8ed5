//! Layered packet decoding.
//!
//! Given a raw byte buffer and the link type that frames it, `strata` decodes
//! the buffer into an ordered chain of protocol layers (link → network →
//! transport → application) and keeps direct-access slots for the canonical
//! layers so callers never have to walk the chain.
//!
//! # Architecture
//!
//! - `layer`: the layer abstraction, type tags, and the payload/failure layers
//! - `decode`: the per-step decoder contract and the baseline decoders
//! - `registry`: link types and the link-type → first-decoder registry
//! - `packet`: the packet façade driving decoders lazily or eagerly
//! - `proto`: built-in Ethernet/IP/TCP/UDP decoders
//!
//! # Example
//!
//! ```
//! use strata::{DecodeMethod, DecoderRegistry, LayerType, LinkType, Packet};
//!
//! let registry = DecoderRegistry::with_defaults();
//! let frame = [0u8; 14]; // an Ethernet header with everything zeroed
//! let mut packet = Packet::decode(&frame, LinkType::ETHERNET, DecodeMethod::Eager, &registry);
//! assert_eq!(packet.layers()[0].layer_type(), LayerType::ETHERNET);
//! ```
//!
//! Capturing frames, building frames, and filtering them are out of scope;
//! this crate only parses bytes that were already obtained.

pub mod decode;
pub mod error;
pub mod layer;
pub mod packet;
pub mod proto;
pub mod registry;

pub use decode::{decode_payload, decode_unknown, DecodeResult, Decoded, DecoderFn, SpecificLayers};
pub use error::DecodeError;
pub use layer::{DecodeFailure, Layer, LayerType, Payload, SharedLayer};
pub use packet::{DecodeMethod, Packet};
pub use registry::{DecoderRegistry, LinkType};
