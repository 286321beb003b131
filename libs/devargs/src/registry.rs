use core::{fmt, slice};

use alloc::vec::Vec;
use log::{debug, warn};

use crate::{
    entry::{DevargsEntry, EntryFields},
    error::DevargsError,
    kind::DeviceKind,
    split::{DevargsStr, split_devargs},
};

pub type Iter<'a> = slice::Iter<'a, DevargsEntry>;

/// The device arguments given at startup, in the order they were given.
///
/// Entries are only ever appended. The same address or driver name may be
/// registered any number of times.
#[derive(Debug, Default, Clone)]
pub struct DevargsRegistry {
    entries: Vec<DevargsEntry>,
}

impl DevargsRegistry {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses `raw` as a device argument of the given kind and appends it.
    ///
    /// On error the registry is left untouched.
    pub fn register(&mut self, kind: DeviceKind, raw: &str) -> Result<(), DevargsError> {
        self.try_register(kind, raw).inspect_err(|err| {
            warn!("Cannot register {kind} device <{raw}>: {err}");
        })
    }

    fn try_register(&mut self, kind: DeviceKind, raw: &str) -> Result<(), DevargsError> {
        let DevargsStr { name, args } = split_devargs(raw)?;
        let entry = DevargsEntry::parse(kind, &name, args)?;

        self.entries
            .try_reserve(1)
            .map_err(|_| DevargsError::OutOfMemory("device entry"))?;
        debug!("Registered device #{}: {entry}", self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn count_by_type(&self, kind: DeviceKind) -> usize {
        self.iter_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }

    pub fn iter_kind(&self, kind: DeviceKind) -> impl Iterator<Item = &DevargsEntry> + Clone {
        self.entries.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Calls `visitor` with the kind and fields of every entry, oldest first.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(DeviceKind, EntryFields<'_>),
    {
        for entry in self {
            visitor(entry.kind(), entry.fields())
        }
    }

    pub fn dump<W: fmt::Write + ?Sized>(&self, w: &mut W) -> fmt::Result {
        writeln!(w, "User device white list:")?;
        for entry in self {
            writeln!(w, "  {entry}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DevargsRegistry {
    type Item = &'a DevargsEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
