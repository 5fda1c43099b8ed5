use thiserror::Error;

/// Why a decoder gave up on its input.
///
/// A failure never propagates as `Err` out of the packet API; the dispatcher
/// materializes it as the terminal [`DecodeFailure`](crate::layer::DecodeFailure)
/// layer of the chain instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No decoder is registered for the packet's link type.
    #[error("unsupported link type")]
    UnsupportedLinkType,

    /// The buffer ended in the middle of a header.
    #[error("truncated {header} header: need {needed} bytes, have {available}")]
    Truncated {
        header: &'static str,
        needed: usize,
        available: usize,
    },

    /// A header field contradicts the protocol definition.
    #[error("malformed {header} header: {reason}")]
    Malformed {
        header: &'static str,
        reason: &'static str,
    },

    /// Cause reported by an external protocol module.
    #[error("{0}")]
    Other(String),
}
