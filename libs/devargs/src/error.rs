use alloc::string::String;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DevargsError {
    #[error("Invalid device argument: {0}")]
    InvalidInput(&'static str),
    #[error("Cannot allocate memory for the {0}")]
    OutOfMemory(&'static str),
    #[error("Invalid PCI identifier <{0}>")]
    InvalidPciAddress(String),
    #[error("Driver name too large: <{0}>")]
    DriverNameTooLong(String),
}
