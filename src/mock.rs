//! Built-in sample fleet used when no reading file is given.

use crate::metrics::DeviceReading;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub time: &'static str,

    pub co2_ppm: u32,

    pub temperature_celsius: f64,

    pub humidity_percent: f64,
}

pub fn devices() -> Vec<DeviceReading> {
    vec![
        device("device-001", "Conference Room A", 680, 22.5, 45.2, true, 3250),
        device("device-002", "Office Wing B", 520, 21.8, 42.1, false, 3100),
        device("device-003", "Meeting Room C", 1150, 24.2, 48.5, true, 2980),
    ]
}

/// Hourly fleet history for the last eight hours.
pub fn history() -> Vec<HistoryPoint> {
    [
        ("08:00", 450, 20.5, 40.0),
        ("09:00", 520, 21.2, 42.0),
        ("10:00", 650, 22.1, 44.0),
        ("11:00", 780, 22.8, 45.0),
        ("12:00", 920, 23.5, 46.0),
        ("13:00", 850, 23.2, 45.0),
        ("14:00", 720, 22.5, 44.0),
        ("15:00", 680, 22.3, 43.0),
    ]
    .into_iter()
    .map(
        |(time, co2_ppm, temperature_celsius, humidity_percent)| HistoryPoint {
            time,
            co2_ppm,
            temperature_celsius,
            humidity_percent,
        },
    )
    .collect()
}

fn device(
    id: &str,
    name: &str,
    co2_ppm: u32,
    temperature_celsius: f64,
    humidity_percent: f64,
    occupancy: bool,
    battery_mv: u32,
) -> DeviceReading {
    DeviceReading {
        id: id.to_string(),
        name: name.to_string(),
        co2_ppm,
        temperature_celsius,
        humidity_percent,
        occupancy,
        battery_mv,
        last_update: None,
    }
}
