//! # Command Line
//!
//! ```text
//! barrel_inspect decode <dump> [--hex] [--config <file>] [--verbose]
//! barrel_inspect encode <barrel.toml> <out.bin>
//! barrel_inspect diff <dump_a> <dump_b> [--hex]
//! ```

use std::path::{Path, PathBuf};

use arsenal_core::{diff, encode, AddonResolver, BarrelDefinition};
use serde::Deserialize;

use crate::addons::FunctionTable;
use crate::config::InspectConfig;
use crate::dump::{read_dump, DumpFormat};
use crate::error::{InspectError, InspectResult};
use crate::report::{render_barrel, render_diff};

/// Usage text.
pub const USAGE: &str = "\
Usage:
  barrel_inspect decode <dump> [--hex] [--config <file>] [--verbose]
  barrel_inspect encode <barrel.toml> <out.bin>
  barrel_inspect diff <dump_a> <dump_b> [--hex]";

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a report for every record in a dump.
    Decode {
        /// Dump file.
        dump: PathBuf,
        /// Force hex input regardless of config.
        hex: bool,
        /// Optional config file.
        config: Option<PathBuf>,
    },
    /// Encode a TOML barrel to 100 raw bytes.
    Encode {
        /// TOML document with a `[barrel]` table.
        input: PathBuf,
        /// Output file.
        output: PathBuf,
    },
    /// Diff the first record of two dumps.
    Diff {
        /// Left dump.
        left: PathBuf,
        /// Right dump.
        right: PathBuf,
        /// Both dumps are hex.
        hex: bool,
    },
}

/// Parsed arguments: the command plus global flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    /// What to do.
    pub command: Command,
    /// Raise the default log level to `debug`.
    pub verbose: bool,
}

/// Parses arguments (without the program name).
///
/// # Errors
///
/// [`InspectError::Usage`] on a missing or unknown argument.
pub fn parse_args(args: &[String]) -> InspectResult<Args> {
    let mut verbose = false;
    let mut hex = false;
    let mut config = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" => verbose = true,
            "--hex" => hex = true,
            "--config" => match iter.next() {
                Some(path) if !path.starts_with("--") => config = Some(PathBuf::from(path)),
                _ => return Err(InspectError::Usage(format!("--config needs a file\n{USAGE}"))),
            },
            flag if flag.starts_with("--") => {
                return Err(InspectError::Usage(format!("unknown option {flag}\n{USAGE}")));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(name) = positional.next() else {
        return Err(InspectError::Usage(USAGE.to_string()));
    };
    let mut next = |what: &str| {
        positional
            .next()
            .ok_or_else(|| InspectError::Usage(format!("missing {what}\n{USAGE}")))
    };
    let reject = |flag: &str, name: &str| {
        Err(InspectError::Usage(format!("{flag} does not apply to {name}\n{USAGE}")))
    };

    let command = match name.to_str() {
        Some("decode") => Command::Decode {
            dump: next("dump file")?,
            hex,
            config,
        },
        Some("encode") if hex => return reject("--hex", "encode"),
        Some("encode") if config.is_some() => return reject("--config", "encode"),
        Some("encode") => Command::Encode {
            input: next("barrel file")?,
            output: next("output file")?,
        },
        Some("diff") if config.is_some() => return reject("--config", "diff"),
        Some("diff") => Command::Diff {
            left: next("left dump")?,
            right: next("right dump")?,
            hex,
        },
        _ => {
            return Err(InspectError::Usage(format!(
                "unknown command {}\n{USAGE}",
                name.display()
            )))
        }
    };
    Ok(Args { command, verbose })
}

/// A TOML barrel document: one `[barrel]` table with all 25 fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarrelDocument {
    /// The barrel.
    pub barrel: BarrelDefinition,
}

/// Runs a command, returning the text to print.
///
/// # Errors
///
/// Whatever the command hits: I/O, TOML, decode errors.
pub fn run(command: &Command) -> InspectResult<String> {
    match command {
        Command::Decode { dump, hex, config } => {
            let config = match config {
                Some(path) => InspectConfig::load(path)?,
                None => InspectConfig::default(),
            };
            let format = if *hex { DumpFormat::Hex } else { config.input.format };
            let table = FunctionTable::from_labels(&config.addons)?;
            let barrels = read_dump(dump, format)?;

            let mut out = String::new();
            for (i, barrel) in barrels.iter().enumerate() {
                tracing::debug!("Barrel {}: {}", i, barrel.to_hex());
                if !table.is_empty() && table.resolve(barrel.addon).is_none() {
                    tracing::warn!("Barrel {}: addon {} not in function table", i, barrel.addon);
                }
                out.push_str(&render_barrel(i, barrel, &config.report, &table));
            }
            Ok(out)
        }
        Command::Encode { input, output } => {
            let barrel = load_barrel_document(input)?;
            std::fs::write(output, encode(&barrel)).map_err(|source| InspectError::Io {
                path: output.clone(),
                source,
            })?;
            tracing::info!("Wrote barrel to {}", output.display());
            Ok(format!("{}\n", barrel.to_hex()))
        }
        Command::Diff { left, right, hex } => {
            let format = if *hex { DumpFormat::Hex } else { DumpFormat::Binary };
            let left = first_record(left, format)?;
            let right = first_record(right, format)?;
            Ok(render_diff(&diff(&left, &right)))
        }
    }
}

/// Parses a TOML barrel document from a file.
///
/// # Errors
///
/// [`InspectError::Io`] or [`InspectError::Toml`].
pub fn load_barrel_document(path: &Path) -> InspectResult<BarrelDefinition> {
    let text = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: BarrelDocument = toml::from_str(&text).map_err(|source| InspectError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(document.barrel)
}

fn first_record(path: &Path, format: DumpFormat) -> InspectResult<BarrelDefinition> {
    let barrels = read_dump(path, format)?;
    if barrels.len() > 1 {
        tracing::warn!(
            "{} holds {} barrels; diffing the first",
            path.display(),
            barrels.len()
        );
    }
    Ok(barrels[0])
}
