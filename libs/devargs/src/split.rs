use alloc::string::String;

use crate::error::DevargsError;

/// A device argument split at its first comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevargsStr {
    /// The PCI address or virtual driver name
    pub name: String,
    /// Everything after the first comma, verbatim. Empty without a comma.
    pub args: String,
}

fn try_to_owned(s: &str, what: &'static str) -> Result<String, DevargsError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|_| DevargsError::OutOfMemory(what))?;
    owned.push_str(s);
    Ok(owned)
}

/// Splits `name[,args]` into its two halves.
///
/// An empty string has no name to split off and is rejected.
pub fn split_devargs(raw: &str) -> Result<DevargsStr, DevargsError> {
    if raw.is_empty() {
        return Err(DevargsError::InvalidInput("empty device argument"));
    }
    let (name, args) = raw.split_once(',').unwrap_or((raw, ""));
    let name = try_to_owned(name, "driver name")?;
    let args = try_to_owned(args, "driver arguments")?;
    Ok(DevargsStr { name, args })
}
