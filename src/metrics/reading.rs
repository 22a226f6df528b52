use chrono::DateTime;
use chrono_tz::Tz;

/// A single snapshot reported by one room device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReading {
    pub id: String,

    pub name: String,

    pub co2_ppm: u32,

    pub temperature_celsius: f64,

    pub humidity_percent: f64,

    pub occupancy: bool,

    pub battery_mv: u32,

    /// `None` is rendered as the current time.
    pub last_update: Option<DateTime<Tz>>,
}
