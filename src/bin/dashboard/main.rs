mod args;
mod csv;
mod render;

use std::{fs::File, io::Write, path::Path, process::ExitCode};

use anyhow::{Context as _, Result, bail};
use args::Args;
use building_environments::{
    alert::{AlertCooldown, Thresholds, evaluate},
    metrics::DeviceReading,
    mock,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser as _;
use indexmap::IndexMap;
use tokio::time::{Duration, sleep};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::{
    csv::CsvReadingIter,
    render::{DeviceAlert, render},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "building_environments=info,dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args, &mut std::io::stdout()).await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let readings = match &args.file {
        Some(path) => load_readings(path, args.timezone)
            .with_context(|| format!("failed to load readings: {path:?}"))?,
        None => mock::devices(),
    };

    let devices: Vec<DeviceReading> = index_by_id(readings)
        .context("failed to index devices")?
        .into_values()
        .collect();
    tracing::info!(devices = devices.len(), "loaded device readings");

    let history = mock::history();
    let thresholds = Thresholds::default();
    let mut cooldown = AlertCooldown::default();
    let delay = Duration::from_millis(args.refresh_delay_ms);

    for refresh in 0..=args.refresh_count {
        if refresh > 0 {
            tracing::info!(refresh, delay_ms = args.refresh_delay_ms, "refreshing");
            sleep(delay).await;
        }

        let now = Utc::now();
        let alerts = collect_alerts(&devices, &thresholds, &mut cooldown, now);

        let frame = render(&devices, &alerts, &history, now.with_timezone(&args.timezone))
            .context("failed to render dashboard")?;
        out.write_all(frame.as_bytes())
            .context("failed to write dashboard")?;
    }

    Ok(())
}

fn load_readings(path: &Path, timezone: Tz) -> Result<Vec<DeviceReading>> {
    let file = File::open(path).with_context(|| format!("failed to open file: {path:?}"))?;

    CsvReadingIter::new(file, timezone)
        .context("failed to create CSV reading iterator")?
        .map(|r| r.context("failed to parse CSV record"))
        .collect()
}

fn index_by_id(readings: Vec<DeviceReading>) -> Result<IndexMap<String, DeviceReading>> {
    let mut devices = IndexMap::with_capacity(readings.len());

    for reading in readings {
        if devices.contains_key(&reading.id) {
            bail!("duplicate device id: {}", reading.id);
        }
        devices.insert(reading.id.clone(), reading);
    }

    Ok(devices)
}

/// Every current alert is rendered; only those past their cooldown are logged.
fn collect_alerts<'a>(
    devices: &'a [DeviceReading],
    thresholds: &Thresholds,
    cooldown: &mut AlertCooldown,
    now: DateTime<Utc>,
) -> Vec<DeviceAlert<'a>> {
    let mut alerts = Vec::new();

    for device in devices {
        for alert in evaluate(device, thresholds) {
            if cooldown.admit(&device.id, alert.kind, now) {
                tracing::warn!(device = %device.id, kind = %alert.kind, "{}", alert.message);
            } else {
                tracing::debug!(device = %device.id, kind = %alert.kind, "alert suppressed (cooldown active)");
            }

            alerts.push(DeviceAlert { device, alert });
        }
    }

    alerts
}
