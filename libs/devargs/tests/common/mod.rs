use devargs::{DevargsRegistry, DeviceKind};

/// Registers every `(kind, raw)` pair, panicking on the first failure.
pub fn registry_with(devargs: &[(DeviceKind, &str)]) -> DevargsRegistry {
    let mut registry = DevargsRegistry::new();
    for (kind, raw) in devargs {
        registry
            .register(*kind, raw)
            .unwrap_or_else(|err| panic!("{kind} <{raw}> should register: {err}"));
    }
    registry
}

pub fn dump_to_string(registry: &DevargsRegistry) -> String {
    let mut out = String::new();
    registry.dump(&mut out).expect("writing to a String");
    out
}

pub fn visit_to_lines(registry: &DevargsRegistry) -> Vec<String> {
    let mut lines = Vec::new();
    registry.for_each(|kind, fields| lines.push(format!("{kind}|{fields}")));
    lines
}
