use core::{
    borrow::Borrow,
    fmt,
    ops::Deref,
};

/// A string stored inline in a buffer of `CAP` bytes.
///
/// Never truncates: a value either fits entirely or is rejected.
#[derive(Clone, Copy)]
pub struct FixedString<const CAP: usize> {
    data: [u8; CAP],
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub needed: usize,
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes do not fit in a buffer of {} bytes",
            self.needed, self.capacity
        )
    }
}

impl core::error::Error for CapacityError {}

impl<const CAP: usize> FixedString<CAP> {
    pub const fn new() -> Self {
        Self {
            data: [0; CAP],
            len: 0,
        }
    }

    pub fn try_from_str(s: &str) -> Result<Self, CapacityError> {
        if s.len() > CAP {
            return Err(CapacityError {
                needed: s.len(),
                capacity: CAP,
            });
        }
        let mut data = [0; CAP];
        data[..s.len()].copy_from_slice(s.as_bytes());
        Ok(Self {
            data,
            len: s.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from a whole &str
        unsafe { core::str::from_utf8_unchecked(&self.data[..self.len]) }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<const CAP: usize> Default for FixedString<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> TryFrom<&str> for FixedString<CAP> {
    type Error = CapacityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_str(value)
    }
}

impl<const CAP: usize> Deref for FixedString<CAP> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const CAP: usize> Borrow<str> for FixedString<CAP> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<const CAP: usize> PartialEq for FixedString<CAP> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const CAP: usize> Eq for FixedString<CAP> {}

impl<const CAP: usize> PartialEq<str> for FixedString<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const CAP: usize> PartialEq<&str> for FixedString<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const CAP: usize> fmt::Debug for FixedString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const CAP: usize> fmt::Display for FixedString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
