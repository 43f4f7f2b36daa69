//! # ARSENAL Inspect
//!
//! Tooling around the barrel codec: reads dumps copied out of the client,
//! prints typed reports, encodes barrels written as TOML, and diffs records
//! while reverse engineering new builds.
//!
//! Everything that touches files, config or logs lives here so that
//! `arsenal_core` stays pure.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod addons;
pub mod cli;
pub mod config;
pub mod derived;
pub mod dump;
pub mod error;
pub mod report;

pub use addons::FunctionTable;
pub use cli::{parse_args, run, Args, Command};
pub use config::{InputConfig, InspectConfig, ReportConfig};
pub use derived::{reload_ticks, render_width, DerivedStats};
pub use dump::{read_dump, split_records, DumpFormat};
pub use error::{InspectError, InspectResult};
