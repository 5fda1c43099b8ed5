//! The per-step decoder contract.
//!
//! A decoder is a stateless function: it consumes its header from the front
//! of the bytes it is given, produces one layer, names the decoder for
//! whatever follows, and hands back the unconsumed remainder. The packet
//! dispatcher threads a [`SpecificLayers`] value through the whole chain so a
//! decoder that occupies a canonical role (link, network, transport,
//! application) can publish its layer for direct access.
//!
//! Decoders must be idempotent: re-invoking one with the same input and a
//! fresh output struct must reproduce the same layer and next decoder. Their
//! only permitted side effect is writing the one slot they own.

use std::sync::Arc;

use crate::error::DecodeError;
use crate::layer::{Payload, SharedLayer};

/// A successful decode step.
#[derive(Clone)]
pub struct Decoded<'a> {
    /// The layer created by this step, appended to the chain by the
    /// dispatcher.
    pub layer: Option<SharedLayer<'a>>,
    /// The decoder for the bytes in `rest`. `None` ends the chain normally.
    pub next: Option<DecoderFn>,
    /// The bytes this step did not consume. An empty remainder also ends the
    /// chain normally.
    pub rest: &'a [u8],
}

/// What one decoder invocation produces. On `Err` the dispatcher synthesizes
/// the terminal failure layer and consults nothing else.
pub type DecodeResult<'a> = Result<Decoded<'a>, DecodeError>;

/// A decoder for one layer of a packet.
///
/// Plain function pointers keep the registry trivially shareable and make the
/// statelessness requirement structural rather than conventional.
pub type DecoderFn = for<'a> fn(&'a [u8], &mut SpecificLayers<'a>) -> DecodeResult<'a>;

/// Direct-access slots for the canonical layers of one packet.
///
/// Each decoder writes at most one slot, with the layer it just produced.
/// Later writes win, though in practice only one decoder per chain position
/// qualifies for each slot. The `error` slot is written by the dispatcher
/// when it synthesizes a failure layer.
#[derive(Debug, Clone, Default)]
pub struct SpecificLayers<'a> {
    pub link: Option<SharedLayer<'a>>,
    pub network: Option<SharedLayer<'a>>,
    pub transport: Option<SharedLayer<'a>>,
    pub application: Option<SharedLayer<'a>>,
    pub error: Option<SharedLayer<'a>>,
}

/// Stands in when the registry has no entry for a link type; always fails.
pub fn decode_unknown<'a>(
    _data: &'a [u8],
    _specific: &mut SpecificLayers<'a>,
) -> DecodeResult<'a> {
    Err(DecodeError::UnsupportedLinkType)
}

/// Terminal fallback: wraps all remaining bytes as an application payload.
///
/// Protocol decoders route here when they cannot classify their inner
/// payload type.
pub fn decode_payload<'a>(data: &'a [u8], specific: &mut SpecificLayers<'a>) -> DecodeResult<'a> {
    let payload = Arc::new(Payload { data });
    specific.application = Some(payload.clone());
    Ok(Decoded {
        layer: Some(payload),
        next: None,
        rest: &[],
    })
}
