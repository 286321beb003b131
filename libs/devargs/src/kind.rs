use core::fmt;

use num_enum::FromPrimitive;

/// What a device argument describes.
///
/// Converting a raw tag never fails: tags without a known meaning land in
/// [`DeviceKind::Unknown`], which registers with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u32)]
pub enum DeviceKind {
    WhitelistedPci = 0,
    BlacklistedPci = 1,
    Virtual = 2,
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl DeviceKind {
    pub const KNOWN: [Self; 3] = [Self::WhitelistedPci, Self::BlacklistedPci, Self::Virtual];

    pub const fn is_pci(self) -> bool {
        matches!(self, Self::WhitelistedPci | Self::BlacklistedPci)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WhitelistedPci => "PCI whitelist",
            Self::BlacklistedPci => "PCI blacklist",
            Self::Virtual => "VIRTUAL",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<DeviceKind> for u32 {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::WhitelistedPci => 0,
            DeviceKind::BlacklistedPci => 1,
            DeviceKind::Virtual => 2,
            DeviceKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for kind in DeviceKind::KNOWN {
            assert_eq!(DeviceKind::from(u32::from(kind)), kind);
        }
    }

    #[test]
    fn other_tags_are_unknown() {
        assert_eq!(DeviceKind::from(3u32), DeviceKind::Unknown(3));
        assert_eq!(DeviceKind::from(u32::MAX), DeviceKind::Unknown(u32::MAX));
        assert_eq!(u32::from(DeviceKind::Unknown(42)), 42);
    }

    #[test]
    fn only_pci_kinds_are_pci() {
        assert!(DeviceKind::WhitelistedPci.is_pci());
        assert!(DeviceKind::BlacklistedPci.is_pci());
        assert!(!DeviceKind::Virtual.is_pci());
        assert!(!DeviceKind::Unknown(7).is_pci());
    }

    #[test]
    fn labels() {
        assert_eq!(DeviceKind::WhitelistedPci.label(), "PCI whitelist");
        assert_eq!(DeviceKind::BlacklistedPci.label(), "PCI blacklist");
        assert_eq!(DeviceKind::Virtual.label(), "VIRTUAL");
        assert_eq!(DeviceKind::Unknown(9).label(), "UNKNOWN");
    }
}
