// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for regenerating Almanac's locale data.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use almanac_data_gen::cldr::CldrSource;
use almanac_data_gen::generate::{create_locales, dump_windows_timezones, recreate_locales};

#[derive(Debug, Parser)]
#[command(
    name = "almanac_data_gen",
    about = "Regenerates the CLDR-derived locale data checked into almanac_data"
)]
struct Cli {
    /// Root of a local cldr-json checkout.
    #[arg(long, value_name = "DIR", default_value = "cldr-json")]
    cldr: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Locale data modules.
    #[command(subcommand)]
    Locale(LocaleCommand),
    /// The Windows time zone mapping.
    #[command(subcommand)]
    Windows(WindowsCommand),
}

#[derive(Debug, Subcommand)]
enum LocaleCommand {
    /// Generate or refresh the named locales.
    Create {
        /// Locale identifiers such as `en`, `pt-BR`, `zh_Hant`.
        #[arg(required = true)]
        locales: Vec<String>,

        /// Locale output directory.
        #[arg(long, value_name = "DIR", default_value = "almanac_data/src/locales")]
        out: PathBuf,
    },
    /// Regenerate every locale already present in the output directory.
    Recreate {
        /// Locale output directory.
        #[arg(long, value_name = "DIR", default_value = "almanac_data/src/locales")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
enum WindowsCommand {
    /// Rewrite the Windows → IANA time zone mapping module.
    DumpTimezones {
        /// Time zone output directory.
        #[arg(long, value_name = "DIR", default_value = "almanac_data/src/timezones")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let source = CldrSource::new(&cli.cldr);

    let result = match cli.command {
        Command::Locale(LocaleCommand::Create { locales, out }) => {
            create_locales(&source, &out, &locales).map(report)
        }
        Command::Locale(LocaleCommand::Recreate { out }) => {
            recreate_locales(&source, &out).map(report)
        }
        Command::Windows(WindowsCommand::DumpTimezones { out }) => {
            dump_windows_timezones(&source, &out).map(|path| {
                println!("wrote {}", path.display());
            })
        }
    };

    if let Err(err) = result {
        eprintln!("almanac_data_gen: {err}");
        process::exit(1);
    }
}

fn report(summary: almanac_data_gen::generate::Summary) {
    println!(
        "generated {} locale(s), skipped {}",
        summary.written.len(),
        summary.skipped.len()
    );
}
