#![no_std]

extern crate alloc;

pub mod entry;
pub mod error;
pub mod kind;
pub mod registry;
pub mod shared;
pub mod split;

pub use devargs_pci::PciAddress;
pub use entry::{DevargsEntry, DevicePayload, DriverName, EntryFields, MAX_DRIVER_NAME_LEN};
pub use error::DevargsError;
pub use kind::DeviceKind;
pub use registry::DevargsRegistry;
pub use shared::SharedRegistry;
pub use split::{DevargsStr, split_devargs};
