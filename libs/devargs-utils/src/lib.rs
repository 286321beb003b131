#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod fixed_string;
