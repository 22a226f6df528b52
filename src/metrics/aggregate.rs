use crate::metrics::{Co2Status, DeviceReading, MetricsError, classify_co2};

/// Fleet-wide statistics, rounded the way the dashboard shows them.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSummary {
    pub avg_co2_ppm: u32,

    pub avg_temperature_celsius: f64,

    pub avg_humidity_percent: f64,

    pub occupied_count: usize,

    pub total: usize,
}

impl FleetSummary {
    pub fn co2_status(&self) -> Co2Status {
        classify_co2(self.avg_co2_ppm)
    }
}

pub fn aggregate(readings: &[DeviceReading]) -> Result<FleetSummary, MetricsError> {
    if readings.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let total = readings.len();
    let n = total as f64;

    let co2_sum: f64 = readings.iter().map(|r| r.co2_ppm as f64).sum();
    let temperature_sum: f64 = readings.iter().map(|r| r.temperature_celsius).sum();
    let humidity_sum: f64 = readings.iter().map(|r| r.humidity_percent).sum();
    let occupied_count = readings.iter().filter(|r| r.occupancy).count();

    Ok(FleetSummary {
        avg_co2_ppm: (co2_sum / n).round() as u32,
        avg_temperature_celsius: round_one_decimal(temperature_sum / n),
        avg_humidity_percent: round_one_decimal(humidity_sum / n),
        occupied_count,
        total,
    })
}

/// Rounds to the nearest tenth of the exact binary value, ties away from zero.
fn round_one_decimal(v: f64) -> f64 {
    let scaled = v * 10f64;
    if scaled.fract().abs() != 0.5 {
        return scaled.round() / 10f64;
    }

    // The product may have been rounded onto the half; its exact error picks the side.
    let error = v.mul_add(10f64, -scaled);
    let rounded = if error < 0f64 {
        scaled.floor()
    } else if error > 0f64 {
        scaled.ceil()
    } else {
        scaled.round()
    };

    rounded / 10f64
}
