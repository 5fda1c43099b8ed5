//! The packet façade and the dispatcher that drives decoder chains.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::decode::{Decoded, DecoderFn, SpecificLayers};
use crate::error::DecodeError;
use crate::layer::{DecodeFailure, LayerType, SharedLayer};
use crate::registry::{DecoderRegistry, LinkType};

/// When layers are computed.
///
/// Both methods produce identical chains and slot contents for the same
/// input; they only differ in when the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMethod {
    /// Decode the minimum number of layers needed to answer each accessor.
    /// Accessors that may advance decoding take `&mut self`, so a lazy
    /// packet cannot be read from two places at once; callers that need to
    /// share a packet should decode it eagerly (or force it with
    /// [`Packet::decode_all`]) first.
    Lazy,
    /// Decode every layer inside [`Packet::decode`]. Slower up front, but
    /// the packet never mutates afterwards and can be read concurrently.
    Eager,
}

#[derive(Debug)]
struct Pending<'a> {
    decoder: DecoderFn,
    data: &'a [u8],
}

/// A raw buffer together with the layers decoded out of it.
///
/// Created once per buffer, link type, and method; the packet borrows the
/// buffer, and every layer payload is a sub-span of it. Once the chain is
/// complete (terminally or through a failure layer) the packet never changes
/// again.
#[derive(Debug)]
pub struct Packet<'a> {
    data: &'a [u8],
    link_type: LinkType,
    layers: Vec<SharedLayer<'a>>,
    specific: SpecificLayers<'a>,
    pending: Option<Pending<'a>>,
}

impl<'a> Packet<'a> {
    /// Decodes `data` framed as `link_type`, looking the first decoder up in
    /// `registry`.
    ///
    /// With [`DecodeMethod::Eager`] the whole chain is decoded before this
    /// returns; with [`DecodeMethod::Lazy`] nothing is decoded until an
    /// accessor asks for it.
    pub fn decode(
        data: &'a [u8],
        link_type: LinkType,
        method: DecodeMethod,
        registry: &DecoderRegistry,
    ) -> Packet<'a> {
        let mut packet = Packet {
            data,
            link_type,
            layers: Vec::new(),
            specific: SpecificLayers::default(),
            pending: Some(Pending {
                decoder: registry.decoder_for(link_type),
                data,
            }),
        };
        if method == DecodeMethod::Eager {
            packet.decode_all();
        }
        packet
    }

    /// Runs the pending decoder once. Returns `false` when the chain is
    /// complete: after a failure, when a decoder names no successor, or when
    /// no bytes remain.
    fn step(&mut self) -> bool {
        let Some(Pending { decoder, data }) = self.pending.take() else {
            return false;
        };
        match decoder(data, &mut self.specific) {
            Ok(Decoded { layer, next, rest }) => {
                if let Some(layer) = layer {
                    trace!(layer_type = %layer.layer_type(), rest = rest.len(), "decoded layer");
                    self.layers.push(layer);
                }
                match next {
                    Some(next) if !rest.is_empty() => {
                        self.pending = Some(Pending {
                            decoder: next,
                            data: rest,
                        });
                        true
                    }
                    _ => false,
                }
            }
            Err(error) => {
                warn!(%error, link_type = %self.link_type, "decode failed");
                let failure: SharedLayer<'a> = Arc::new(DecodeFailure::new(data, error));
                self.specific.error = Some(failure.clone());
                self.layers.push(failure);
                false
            }
        }
    }

    /// Decodes every remaining layer. A no-op once the chain is complete, so
    /// a lazy packet forced with this becomes as shareable as an eager one.
    pub fn decode_all(&mut self) {
        while self.step() {}
    }

    /// All layers of the packet, in decode order. Forces full decoding.
    pub fn layers(&mut self) -> &[SharedLayer<'a>] {
        self.decode_all();
        &self.layers
    }

    /// The first layer with the given type, decoding only as far as needed
    /// to find it.
    pub fn layer(&mut self, layer_type: LayerType) -> Option<SharedLayer<'a>> {
        let mut searched = 0;
        loop {
            if let Some(found) = self.layers[searched..]
                .iter()
                .find(|layer| layer.layer_type() == layer_type)
            {
                return Some(found.clone());
            }
            searched = self.layers.len();
            if !self.step() && searched == self.layers.len() {
                return None;
            }
        }
    }

    fn slot(
        &mut self,
        get: fn(&SpecificLayers<'a>) -> Option<SharedLayer<'a>>,
    ) -> Option<SharedLayer<'a>> {
        loop {
            if let Some(layer) = get(&self.specific) {
                return Some(layer);
            }
            if !self.step() {
                // The final step may have been the one that filled the slot.
                return get(&self.specific);
            }
        }
    }

    /// The link layer, if any decoder in the chain claimed that role.
    pub fn link_layer(&mut self) -> Option<SharedLayer<'a>> {
        self.slot(|specific| specific.link.clone())
    }

    /// The network layer, if any decoder in the chain claimed that role.
    pub fn network_layer(&mut self) -> Option<SharedLayer<'a>> {
        self.slot(|specific| specific.network.clone())
    }

    /// The transport layer, if any decoder in the chain claimed that role.
    pub fn transport_layer(&mut self) -> Option<SharedLayer<'a>> {
        self.slot(|specific| specific.transport.clone())
    }

    /// The application layer, if any decoder in the chain claimed that role.
    pub fn application_layer(&mut self) -> Option<SharedLayer<'a>> {
        self.slot(|specific| specific.application.clone())
    }

    /// The failure layer, if the chain terminated in one. Forces full
    /// decoding when the chain is still healthy.
    pub fn error_layer(&mut self) -> Option<SharedLayer<'a>> {
        self.slot(|specific| specific.error.clone())
    }

    /// The failure cause, absent when the chain ended normally.
    pub fn error(&mut self) -> Option<DecodeError> {
        self.error_layer().and_then(|layer| layer.error().cloned())
    }

    /// The layers decoded so far, without advancing. Complete for eager or
    /// fully forced packets.
    pub fn decoded_layers(&self) -> &[SharedLayer<'a>] {
        &self.layers
    }

    /// The canonical slots as currently populated, without advancing.
    pub fn specific_layers(&self) -> &SpecificLayers<'a> {
        &self.specific
    }

    /// Whether the chain is complete (terminally or through a failure).
    pub fn is_fully_decoded(&self) -> bool {
        self.pending.is_none()
    }

    /// The raw bytes this packet was decoded from.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The link type the first decoder was chosen by.
    pub fn link_type(&self) -> LinkType {
        self.link_type
    }
}
