use std::io::Write;

use devargs::{DevargsEntry, DevargsRegistry, DeviceKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    kind: &'static str,
    tag: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pci_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    driver_name: Option<&'a str>,
    args: &'a str,
}

fn kind_name(kind: DeviceKind) -> &'static str {
    match kind {
        DeviceKind::WhitelistedPci => "whitelisted_pci",
        DeviceKind::BlacklistedPci => "blacklisted_pci",
        DeviceKind::Virtual => "virtual",
        DeviceKind::Unknown(_) => "unknown",
    }
}

impl<'a> From<&'a DevargsEntry> for EntryView<'a> {
    fn from(entry: &'a DevargsEntry) -> Self {
        Self {
            kind: kind_name(entry.kind()),
            tag: entry.kind().into(),
            pci_address: entry.pci_address().map(ToString::to_string),
            driver_name: entry.driver_name(),
            args: entry.args(),
        }
    }
}

pub fn write_text<W: Write>(out: &mut W, registry: &DevargsRegistry) -> anyhow::Result<()> {
    let mut text = String::new();
    registry.dump(&mut text)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, registry: &DevargsRegistry) -> anyhow::Result<()> {
    let entries: Vec<EntryView> = registry.iter().map(EntryView::from).collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn registry() -> DevargsRegistry {
        let mut registry = DevargsRegistry::new();
        registry
            .register(DeviceKind::WhitelistedPci, "0000:01:00.0,a=1")
            .unwrap();
        registry
            .register(DeviceKind::Virtual, "eth_pcap0,iface=eth0")
            .unwrap();
        registry.register(DeviceKind::Unknown(5), "x").unwrap();
        registry
    }

    #[test]
    fn text_is_the_registry_dump() {
        let mut out = Vec::new();
        write_text(&mut out, &registry()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "User device white list:\n  PCI whitelist 0000:01:00.0 a=1\n  VIRTUAL eth_pcap0 iface=eth0\n  UNKNOWN \n"
        );
    }

    #[test]
    fn json_lists_entries_in_order() {
        let mut out = Vec::new();
        write_json(&mut out, &registry()).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!([
                {"kind": "whitelisted_pci", "tag": 0, "pci_address": "0000:01:00.0", "args": "a=1"},
                {"kind": "virtual", "tag": 2, "driver_name": "eth_pcap0", "args": "iface=eth0"},
                {"kind": "unknown", "tag": 5, "args": ""},
            ])
        );
    }

    #[test]
    fn json_of_empty_registry() {
        let mut out = Vec::new();
        write_json(&mut out, &DevargsRegistry::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
