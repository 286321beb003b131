#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod address;

pub use address::{PciAddress, PciAddressParseError};
