/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use unit_algebra::systems::catalog;
use unit_algebra::{CanonicalUnit, UnitError, UnitInfo};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit table
///
/// Prints the units of the built-in catalogs with their ratio to the
/// reference unit.
struct Args {
    /// Print ASCII symbols.
    #[clap(long, short)]
    ascii: bool,
    /// Output one JSON object per unit.
    #[clap(long, short)]
    json: bool,
    /// Increase verbosity (logged to stderr).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only list these catalogs (si, international, natural).
    system: Vec<String>,
}

#[derive(Serialize)]
struct Entry<'a> {
    system: &'a str,
    symbol: String,
    canonical: CanonicalUnit,
    quantity: Option<String>,
}

impl<'a> Entry<'a> {
    fn new(system: &'a str, unit: &'static UnitInfo, ascii: bool) -> Self {
        Entry {
            system,
            symbol: unit.symbol_text(ascii),
            canonical: unit.canonical(),
            quantity: unit.quantity_spec().map(|q| match ascii {
                true => format!("{q:#}"),
                false => q.to_string(),
            }),
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = print_table(&args) {
        eprintln!("{}", e);
        process::exit(1)
    }
}

fn print_table(args: &Args) -> Result<(), UnitError> {
    let systems = catalog();

    if let Some(unknown) = args
        .system
        .iter()
        .find(|s| !systems.iter().any(|(name, _)| name == s))
    {
        return Err(UnitError::UnknownSystem(unknown.to_string()));
    }

    for (system, units) in systems {
        if !args.system.is_empty() && !args.system.iter().any(|s| s == system) {
            debug!("skipping catalog {system}");
            continue;
        }
        info!("listing {} units of catalog {system}", units.len());
        for unit in units {
            let entry = Entry::new(system, unit, args.ascii);
            match args.json {
                true => println!("{}", serde_json::to_string(&entry)?),
                false => {
                    let canonical = match args.ascii {
                        true => format!("{:#}", entry.canonical),
                        false => entry.canonical.to_string(),
                    };
                    println!(
                        "{:<14} {:<8} {:<32} {}",
                        entry.system,
                        entry.symbol,
                        canonical,
                        entry.quantity.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }

    Ok(())
}
