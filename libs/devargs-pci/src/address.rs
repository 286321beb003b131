use core::{fmt, str::FromStr};

use num_traits::Num;
use thiserror::Error;

/// Largest domain accepted by the qualified grammar.
pub const MAX_DOMAIN: u32 = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PciAddress {
    pub domain: u32,
    pub bus: u8,
    pub device: u8,
    pub function: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PciField {
    Domain,
    Bus,
    Device,
    Function,
}

impl fmt::Display for PciField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "domain",
            Self::Bus => "bus",
            Self::Device => "device",
            Self::Function => "function",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PciAddressParseError {
    #[error("Missing '{0}' separator")]
    MissingSeparator(char),
    #[error("Invalid {0} field")]
    InvalidField(PciField),
    #[error("The {0} field is out of range")]
    OutOfRange(PciField),
}

/// Fields are bare hex digits: no sign, no `0x` prefix, no whitespace
fn parse_field<N: Num>(s: &str, field: PciField) -> Result<N, PciAddressParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PciAddressParseError::InvalidField(field));
    }
    N::from_str_radix(s, 16).map_err(|_| PciAddressParseError::OutOfRange(field))
}

fn split_field(s: &str, sep: char) -> Result<(&str, &str), PciAddressParseError> {
    s.split_once(sep)
        .ok_or(PciAddressParseError::MissingSeparator(sep))
}

impl PciAddress {
    pub const fn new(domain: u32, bus: u8, device: u8, function: u8) -> Self {
        Self {
            domain,
            bus,
            device,
            function,
        }
    }

    /// Parses the short `bus:device.function` form. The domain is 0.
    pub fn parse_bdf(s: &str) -> Result<Self, PciAddressParseError> {
        let (bus, rest) = split_field(s, ':')?;
        let (device, function) = split_field(rest, '.')?;
        Ok(Self {
            domain: 0,
            bus: parse_field(bus, PciField::Bus)?,
            device: parse_field(device, PciField::Device)?,
            function: parse_field(function, PciField::Function)?,
        })
    }

    /// Parses the qualified `domain:bus:device.function` form.
    pub fn parse_dom_bdf(s: &str) -> Result<Self, PciAddressParseError> {
        let (domain, rest) = split_field(s, ':')?;
        let domain: u32 = parse_field(domain, PciField::Domain)?;
        if domain > MAX_DOMAIN {
            return Err(PciAddressParseError::OutOfRange(PciField::Domain));
        }
        Ok(Self {
            domain,
            ..Self::parse_bdf(rest)?
        })
    }
}

impl FromStr for PciAddress {
    type Err = PciAddressParseError;

    /// Tries the short form first, then the qualified one.
    ///
    /// When both fail, the error reported is the one of the grammar the input
    /// looks like, judged by its number of `:` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bdf(s).or_else(|short| {
            Self::parse_dom_bdf(s).map_err(|qualified| {
                if s.matches(':').count() > 1 {
                    qualified
                } else {
                    short
                }
            })
        })
    }
}

impl fmt::Display for PciAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:02x}:{:02x}.{:x}",
            self.domain, self.bus, self.device, self.function
        )
    }
}
