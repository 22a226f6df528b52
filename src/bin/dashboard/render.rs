use std::fmt::{self, Write as _};

use building_environments::{
    alert::{Alert, recommendation},
    metrics::{DeviceReading, MetricsError, aggregate, classify_battery, classify_co2},
    mock::HistoryPoint,
};
use chrono::DateTime;
use chrono_tz::Tz;

const TITLE: &str = "Smart Building Dashboard";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PPM_PER_BAR: u32 = 50;

#[derive(Debug)]
pub struct DeviceAlert<'a> {
    pub device: &'a DeviceReading,
    pub alert: Alert,
}

pub fn render(
    devices: &[DeviceReading],
    alerts: &[DeviceAlert<'_>],
    history: &[HistoryPoint],
    now: DateTime<Tz>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{TITLE}  [Live]")?;
    writeln!(out)?;
    write_overview(&mut out, devices)?;
    writeln!(out)?;
    write_alerts(&mut out, alerts)?;
    writeln!(out)?;
    write_devices(&mut out, devices, now)?;
    writeln!(out)?;
    write_history(&mut out, history)?;
    writeln!(out)?;
    writeln!(out, "v{VERSION} - Monitoring {} devices", devices.len())?;

    Ok(out)
}

fn write_overview(out: &mut String, devices: &[DeviceReading]) -> fmt::Result {
    writeln!(out, "Overview")?;

    let summary = match aggregate(devices) {
        Ok(s) => s,
        Err(MetricsError::EmptyInput) => {
            return writeln!(out, "  No devices reporting");
        }
    };

    writeln!(
        out,
        "  Average CO2   {} ppm [{}]",
        summary.avg_co2_ppm,
        summary.co2_status()
    )?;
    writeln!(
        out,
        "  Temperature   {:.1}°C  Comfortable",
        summary.avg_temperature_celsius
    )?;
    writeln!(
        out,
        "  Humidity      {:.1}%  Optimal",
        summary.avg_humidity_percent
    )?;
    writeln!(
        out,
        "  Occupied      {}/{}  Active spaces",
        summary.occupied_count, summary.total
    )
}

fn write_alerts(out: &mut String, alerts: &[DeviceAlert<'_>]) -> fmt::Result {
    writeln!(out, "Alerts")?;

    if alerts.is_empty() {
        return writeln!(out, "  No active alerts");
    }

    for DeviceAlert { device, alert } in alerts {
        writeln!(out, "  {} ({}): {}", device.name, device.id, alert.message)?;
        writeln!(out, "    -> {}", recommendation(alert.kind, alert.level))?;
    }

    Ok(())
}

fn write_devices(out: &mut String, devices: &[DeviceReading], now: DateTime<Tz>) -> fmt::Result {
    writeln!(out, "All Devices")?;

    for device in devices {
        let occupancy = if device.occupancy {
            "Occupied"
        } else {
            "Vacant"
        };
        let last_update = device.last_update.unwrap_or(now);

        writeln!(out, "  {} [{occupancy}]", device.name)?;
        writeln!(
            out,
            "    CO2          {} ppm [{}]",
            device.co2_ppm,
            classify_co2(device.co2_ppm)
        )?;
        writeln!(out, "    Temperature  {}°C", device.temperature_celsius)?;
        writeln!(out, "    Humidity     {}%", device.humidity_percent)?;
        writeln!(
            out,
            "    Battery      {} mV [{}]",
            device.battery_mv,
            classify_battery(device.battery_mv)
        )?;
        writeln!(
            out,
            "    Last update: {}",
            last_update.format("%H:%M:%S")
        )?;
    }

    Ok(())
}

fn write_history(out: &mut String, history: &[HistoryPoint]) -> fmt::Result {
    writeln!(out, "Last {} Hours", history.len())?;

    for point in history {
        writeln!(
            out,
            "  {}  {:>5} ppm  {:>4.1}°C  {:>4.1}%  {}",
            point.time,
            point.co2_ppm,
            point.temperature_celsius,
            point.humidity_percent,
            "#".repeat((point.co2_ppm / PPM_PER_BAR) as usize)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use building_environments::{
        alert::{Thresholds, evaluate},
        mock,
    };
    use chrono::TimeZone as _;

    use super::*;

    fn now() -> DateTime<Tz> {
        chrono_tz::UTC
            .with_ymd_and_hms(2026, 1, 15, 10, 4, 5)
            .unwrap()
    }

    #[test]
    fn renders_mock_fleet() {
        let devices = mock::devices();

        let out = render(&devices, &[], &mock::history(), now()).unwrap();

        assert!(out.contains("Average CO2   783 ppm [Good]"), "{out}");
        assert!(out.contains("Temperature   22.8°C"), "{out}");
        assert!(out.contains("Humidity      45.3%"), "{out}");
        assert!(out.contains("Occupied      2/3"), "{out}");
        assert!(out.contains("Meeting Room C [Occupied]"), "{out}");
        assert!(out.contains("Office Wing B [Vacant]"), "{out}");
        assert!(out.contains("CO2          1150 ppm [Poor]"), "{out}");
        assert!(out.contains("Battery      2980 mV [Low]"), "{out}");
        assert!(out.contains("Last update: 10:04:05"), "{out}");
        assert!(out.contains("No active alerts"), "{out}");
        assert!(out.contains("Monitoring 3 devices"), "{out}");
    }

    #[test]
    fn empty_fleet_renders_neutral_state() {
        let out = render(&[], &[], &[], now()).unwrap();

        assert!(out.contains("No devices reporting"), "{out}");
        assert!(out.contains("Monitoring 0 devices"), "{out}");
    }

    #[test]
    fn renders_alerts_with_recommendations() {
        let mut devices = mock::devices();
        devices[2].co2_ppm = 1600;

        let alerts: Vec<DeviceAlert<'_>> = evaluate(&devices[2], &Thresholds::default())
            .into_iter()
            .map(|alert| DeviceAlert {
                device: &devices[2],
                alert,
            })
            .collect();

        let out = render(&devices, &alerts, &[], now()).unwrap();

        assert!(
            out.contains(
                "Meeting Room C (device-003): CRITICAL: CO2 level at 1600 ppm (threshold: 1500 ppm)"
            ),
            "{out}"
        );
        assert!(out.contains("-> IMMEDIATE: Increase ventilation"), "{out}");
    }

    #[test]
    fn history_bars_scale_with_co2() {
        let out = render(&[], &[], &mock::history(), now()).unwrap();

        assert!(out.contains("Last 8 Hours"), "{out}");
        assert!(out.contains(&format!("08:00    450 ppm  20.5°C  40.0%  {}", "#".repeat(9))), "{out}");
    }
}
