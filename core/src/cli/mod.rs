pub mod report;

use crate::stats::imstat::DEFAULT_PROGRAM;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for idsfetch
#[derive(Parser, Debug)]
#[command(name = "idsfetch")]
#[command(about = "Copy instrument FITS frames from the observation store into per-night directories")]
#[command(version)]
pub struct FetchCli {
    /// Detector filter: EEV10, REDPLUS2 or BOTH
    #[arg(value_name = "DETECTOR")]
    pub detector: String,

    /// Observation type filter: ARC, BIAS, DARK, FLASH, FLAT, SKY, TARGET or ALL
    #[arg(value_name = "OBSTYPE")]
    pub obstype: String,

    /// Night to fetch: YYYYMMDD, YYYYMMDD:YYYYMMDD (inclusive) or ALL
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Observation data store root
    #[arg(long, default_value = "/obsdata/inta")]
    pub source: PathBuf,

    /// Destination root for per-night working directories
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for idstat
#[derive(Parser, Debug)]
#[command(name = "idstat")]
#[command(about = "Run per-frame statistics over bias and science frames in night directories")]
#[command(version)]
pub struct StatCli {
    /// Statistics program to invoke, one file reference per call
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub command: String,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialises env_logger; `-v` lowers the filter to debug
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    builder.format_timestamp(None);
    builder.init();
}
