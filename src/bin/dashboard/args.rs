use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    /// CSV file with one reading per device; the built-in sample fleet is used when omitted.
    #[arg(long, env = "DASHBOARD_FILE")]
    pub file: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    pub refresh_count: u32,

    #[arg(long, default_value_t = 1000)]
    pub refresh_delay_ms: u64,
}
