use anyhow::Context;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use devargs::{DevargsRegistry, DeviceKind};
use log::{LevelFilter, info, warn};

mod logger;
mod output;

#[derive(Parser, Debug)]
#[command(version, about = "Register startup device arguments and list them", long_about = None)]
struct Args {
    /// Add a PCI device to the white list: [domain:]bus:devid.func[,args]
    #[arg(short = 'w', long = "pci-whitelist", value_name = "DEVARGS")]
    pci_whitelist: Vec<String>,
    /// Add a PCI device to the black list: [domain:]bus:devid.func[,args]
    #[arg(
        short = 'b',
        long = "pci-blacklist",
        value_name = "DEVARGS",
        conflicts_with = "pci_whitelist"
    )]
    pci_blacklist: Vec<String>,
    /// Add a virtual device: driver[,args]
    #[arg(long, value_name = "DEVARGS")]
    vdev: Vec<String>,
    /// Skip device arguments that fail to register instead of stopping
    #[arg(env = "DEVARGS_SKIP_INVALID", long)]
    skip_invalid: bool,
    #[arg(env = "DEVARGS_LOG", long, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
    /// Print the device list as JSON
    #[arg(long)]
    json: bool,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level {s:?}"))
}

impl Args {
    /// Device arguments of all kinds, in the order they appear on the command line
    fn ordered_devargs<'a>(&'a self, matches: &ArgMatches) -> Vec<(DeviceKind, &'a str)> {
        let options = [
            ("pci_whitelist", DeviceKind::WhitelistedPci, &self.pci_whitelist),
            ("pci_blacklist", DeviceKind::BlacklistedPci, &self.pci_blacklist),
            ("vdev", DeviceKind::Virtual, &self.vdev),
        ];
        let mut devargs: Vec<_> = options
            .into_iter()
            .flat_map(|(id, kind, values)| {
                matches
                    .indices_of(id)
                    .into_iter()
                    .flatten()
                    .zip(values)
                    .map(move |(index, raw)| (index, kind, raw.as_str()))
            })
            .collect();
        devargs.sort_by_key(|&(index, ..)| index);
        devargs.into_iter().map(|(_, kind, raw)| (kind, raw)).collect()
    }
}

fn register_all(
    registry: &mut DevargsRegistry,
    devargs: &[(DeviceKind, &str)],
    skip_invalid: bool,
) -> anyhow::Result<()> {
    for &(kind, raw) in devargs {
        match registry.register(kind, raw) {
            Ok(()) => {}
            Err(err) if skip_invalid => warn!("Skipping {kind} device <{raw}>: {err}"),
            Err(err) => {
                return Err(err).with_context(|| format!("Cannot register {kind} device <{raw}>"));
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches)?;
    logger::init(args.log_level)?;

    let mut registry = DevargsRegistry::new();
    register_all(
        &mut registry,
        &args.ordered_devargs(&matches),
        args.skip_invalid,
    )?;
    for kind in DeviceKind::KNOWN {
        info!("{kind} devices: {}", registry.count_by_type(kind));
    }

    let mut stdout = std::io::stdout().lock();
    if args.json {
        output::write_json(&mut stdout, &registry)
    } else {
        output::write_text(&mut stdout, &registry)
    }
}
