//! Built-in protocol decoders.
//!
//! Each decoder consumes its own header from the front of its input,
//! publishes itself into the canonical slot it occupies, and routes the
//! remainder to the next decoder, falling back to the generic payload decoder
//! when it cannot classify what follows. None of them decodes deeper than its own
//! header; that is always the next decoder's job.

pub mod eth;
pub mod ip;
pub mod tcp;
pub mod udp;
