#![no_std]

pub mod eth;
pub mod ip;
pub mod tcp;
pub mod udp;
