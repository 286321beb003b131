use spin::Mutex;

use crate::{error::DevargsError, kind::DeviceKind, registry::DevargsRegistry};

/// A [`DevargsRegistry`] that can be registered into through a shared
/// reference.
///
/// Each call holds the lock for its whole duration, so a failed
/// registration is never observed half done.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: Mutex<DevargsRegistry>,
}

impl SharedRegistry {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(DevargsRegistry::new()),
        }
    }

    pub fn register(&self, kind: DeviceKind, raw: &str) -> Result<(), DevargsError> {
        self.inner.lock().register(kind, raw)
    }

    pub fn count_by_type(&self, kind: DeviceKind) -> usize {
        self.inner.lock().count_by_type(kind)
    }

    /// Runs `f` on the registry with the lock held
    pub fn with<R>(&self, f: impl FnOnce(&DevargsRegistry) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> DevargsRegistry {
        self.inner.into_inner()
    }
}

impl From<DevargsRegistry> for SharedRegistry {
    fn from(registry: DevargsRegistry) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }
}
