use core::fmt;

use alloc::string::String;
use devargs_pci::PciAddress;
use devargs_utils::fixed_string::FixedString;
use log::debug;

use crate::{error::DevargsError, kind::DeviceKind};

/// Longest virtual driver name, in bytes
pub const MAX_DRIVER_NAME_LEN: usize = 31;

pub type DriverName = FixedString<MAX_DRIVER_NAME_LEN>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevicePayload {
    Pci(PciAddress),
    Virtual { driver_name: DriverName },
    /// Kinds this registry does not know how to parse
    None,
}

/// One registered device argument. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevargsEntry {
    kind: DeviceKind,
    payload: DevicePayload,
    args: String,
}

impl DevargsEntry {
    pub(crate) fn parse(kind: DeviceKind, name: &str, args: String) -> Result<Self, DevargsError> {
        let payload = match kind {
            DeviceKind::WhitelistedPci | DeviceKind::BlacklistedPci => {
                let address = name.parse::<PciAddress>().map_err(|err| {
                    debug!("<{name}> is not a PCI address: {err}");
                    DevargsError::InvalidPciAddress(name.into())
                })?;
                DevicePayload::Pci(address)
            }
            DeviceKind::Virtual => {
                let driver_name = DriverName::try_from_str(name)
                    .map_err(|_| DevargsError::DriverNameTooLong(name.into()))?;
                DevicePayload::Virtual { driver_name }
            }
            DeviceKind::Unknown(_) => DevicePayload::None,
        };
        Ok(Self {
            kind,
            payload,
            args,
        })
    }

    pub const fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub const fn payload(&self) -> &DevicePayload {
        &self.payload
    }

    pub fn args(&self) -> &str {
        &self.args
    }

    pub const fn pci_address(&self) -> Option<&PciAddress> {
        match &self.payload {
            DevicePayload::Pci(address) => Some(address),
            _ => None,
        }
    }

    pub fn driver_name(&self) -> Option<&str> {
        match &self.payload {
            DevicePayload::Virtual { driver_name } => Some(driver_name.as_str()),
            _ => None,
        }
    }

    pub fn fields(&self) -> EntryFields<'_> {
        let args = self.args.as_str();
        match (self.kind, &self.payload) {
            (DeviceKind::WhitelistedPci | DeviceKind::BlacklistedPci, DevicePayload::Pci(address)) => {
                EntryFields::Pci { address, args }
            }
            (DeviceKind::Virtual, DevicePayload::Virtual { driver_name }) => EntryFields::Virtual {
                driver_name: driver_name.as_str(),
                args,
            },
            _ => EntryFields::Args(args),
        }
    }
}

/// The kind-specific part of an entry, as handed to registry visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFields<'a> {
    Pci {
        address: &'a PciAddress,
        args: &'a str,
    },
    Virtual {
        driver_name: &'a str,
        args: &'a str,
    },
    /// Fallback for entries without a known payload
    Args(&'a str),
}

impl<'a> EntryFields<'a> {
    pub const fn args(&self) -> &'a str {
        match self {
            Self::Pci { args, .. } | Self::Virtual { args, .. } | Self::Args(args) => *args,
        }
    }
}

impl fmt::Display for EntryFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pci { address, args } => write!(f, "{address} {args}"),
            Self::Virtual { driver_name, args } => write!(f, "{driver_name} {args}"),
            Self::Args(args) => f.write_str(args),
        }
    }
}

impl fmt::Display for DevargsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn pci_entry_holds_address() {
        let entry = DevargsEntry::parse(DeviceKind::BlacklistedPci, "02:00.1", "".into()).unwrap();
        assert_eq!(entry.kind(), DeviceKind::BlacklistedPci);
        assert_eq!(entry.pci_address(), Some(&PciAddress::new(0, 2, 0, 1)));
        assert_eq!(entry.driver_name(), None);
        assert_eq!(entry.to_string(), "PCI blacklist 0000:02:00.1 ");
    }

    #[test]
    fn virtual_entry_holds_name() {
        let entry = DevargsEntry::parse(DeviceKind::Virtual, "eth_ring0", "nodeaction=r0:0:CREATE".into())
            .unwrap();
        assert_eq!(entry.driver_name(), Some("eth_ring0"));
        assert_eq!(entry.pci_address(), None);
        assert_eq!(entry.args(), "nodeaction=r0:0:CREATE");
        assert_eq!(entry.to_string(), "VIRTUAL eth_ring0 nodeaction=r0:0:CREATE");
    }

    #[test]
    fn driver_name_at_capacity_fits() {
        let name = "n".repeat(MAX_DRIVER_NAME_LEN);
        let entry = DevargsEntry::parse(DeviceKind::Virtual, &name, "".into()).unwrap();
        assert_eq!(entry.driver_name(), Some(name.as_str()));

        let name = "n".repeat(MAX_DRIVER_NAME_LEN + 1);
        assert_eq!(
            DevargsEntry::parse(DeviceKind::Virtual, &name, "".into()),
            Err(DevargsError::DriverNameTooLong(name))
        );
    }

    #[test]
    fn unknown_kind_has_no_payload() {
        let entry = DevargsEntry::parse(DeviceKind::Unknown(5), "whatever", "k=v".into()).unwrap();
        assert_eq!(entry.payload(), &DevicePayload::None);
        assert_eq!(entry.fields(), EntryFields::Args("k=v"));
        assert_eq!(entry.to_string(), "UNKNOWN k=v");
    }

    #[test]
    fn fields_expose_args() {
        let entry = DevargsEntry::parse(DeviceKind::WhitelistedPci, "0000:05:00.0", "a=1".into()).unwrap();
        assert_eq!(entry.fields().args(), "a=1");
        assert_eq!(entry.fields().to_string(), "0000:05:00.0 a=1");
    }
}
