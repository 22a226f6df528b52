use crate::alert::{AlertKind, AlertLevel};
use crate::metrics::DeviceReading;

#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub co2_warning_ppm: u32,
    pub co2_critical_ppm: u32,
    pub temperature_warning_celsius: f64,
    pub temperature_critical_celsius: f64,
    pub battery_warning_mv: u32,
    pub battery_critical_mv: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            co2_warning_ppm: 1200,
            co2_critical_ppm: 1500,
            temperature_warning_celsius: 27.0,
            temperature_critical_celsius: 30.0,
            battery_warning_mv: 2400,
            battery_critical_mv: 2200,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,

    pub level: AlertLevel,

    pub value: f64,

    pub threshold: f64,

    pub message: String,
}

impl Alert {
    fn new(kind: AlertKind, level: AlertLevel, value: f64, threshold: f64) -> Self {
        Self {
            kind,
            level,
            value,
            threshold,
            message: kind.message(level, value, threshold),
        }
    }
}

/// Returns at most one alert per kind, critical taking precedence over warning.
pub fn evaluate(reading: &DeviceReading, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let co2 = reading.co2_ppm;
    if co2 >= thresholds.co2_critical_ppm {
        alerts.push(Alert::new(
            AlertKind::Co2,
            AlertLevel::Critical,
            co2 as f64,
            thresholds.co2_critical_ppm as f64,
        ));
    } else if co2 >= thresholds.co2_warning_ppm {
        alerts.push(Alert::new(
            AlertKind::Co2,
            AlertLevel::Warning,
            co2 as f64,
            thresholds.co2_warning_ppm as f64,
        ));
    }

    let temperature = reading.temperature_celsius;
    if temperature >= thresholds.temperature_critical_celsius {
        alerts.push(Alert::new(
            AlertKind::Temperature,
            AlertLevel::Critical,
            temperature,
            thresholds.temperature_critical_celsius,
        ));
    } else if temperature >= thresholds.temperature_warning_celsius {
        alerts.push(Alert::new(
            AlertKind::Temperature,
            AlertLevel::Warning,
            temperature,
            thresholds.temperature_warning_celsius,
        ));
    }

    let battery = reading.battery_mv;
    if battery <= thresholds.battery_critical_mv {
        alerts.push(Alert::new(
            AlertKind::Battery,
            AlertLevel::Critical,
            battery as f64,
            thresholds.battery_critical_mv as f64,
        ));
    } else if battery <= thresholds.battery_warning_mv {
        alerts.push(Alert::new(
            AlertKind::Battery,
            AlertLevel::Warning,
            battery as f64,
            thresholds.battery_warning_mv as f64,
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::recommendation;
    use crate::mock;

    fn reading(co2_ppm: u32, temperature_celsius: f64, battery_mv: u32) -> DeviceReading {
        DeviceReading {
            id: "device-900".to_string(),
            name: "Lab".to_string(),
            co2_ppm,
            temperature_celsius,
            humidity_percent: 55.0,
            occupancy: true,
            battery_mv,
            last_update: None,
        }
    }

    #[test]
    fn mock_fleet_raises_no_alerts() {
        let thresholds = Thresholds::default();

        for device in mock::devices() {
            assert!(evaluate(&device, &thresholds).is_empty(), "{}", device.id);
        }
    }

    #[test]
    fn warnings_for_every_kind() {
        let alerts = evaluate(&reading(1350, 28.5, 2300), &Thresholds::default());

        let summary: Vec<(AlertKind, AlertLevel)> =
            alerts.iter().map(|a| (a.kind, a.level)).collect();
        assert_eq!(
            summary,
            vec![
                (AlertKind::Co2, AlertLevel::Warning),
                (AlertKind::Temperature, AlertLevel::Warning),
                (AlertKind::Battery, AlertLevel::Warning),
            ]
        );
        assert_eq!(
            alerts[0].message,
            "WARNING: CO2 level at 1350 ppm (threshold: 1200 ppm)"
        );
        assert_eq!(
            alerts[1].message,
            "WARNING: Temperature at 28.5°C (threshold: 27.0°C)"
        );
        assert_eq!(
            alerts[2].message,
            "WARNING: Battery voltage at 2300 mV (threshold: 2400 mV)"
        );
    }

    #[test]
    fn critical_takes_precedence() {
        let alerts = evaluate(&reading(1500, 30.0, 2200), &Thresholds::default());

        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(|a| a.level == AlertLevel::Critical));
        assert_eq!(alerts[0].threshold, 1500.0);
        assert_eq!(
            alerts[2].message,
            "CRITICAL: Battery voltage at 2200 mV (threshold: 2200 mV)"
        );
    }

    #[test]
    fn boundaries() {
        let thresholds = Thresholds::default();

        assert!(evaluate(&reading(1199, 26.9, 2401), &thresholds).is_empty());

        let alerts = evaluate(&reading(1200, 27.0, 2400), &thresholds);
        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(|a| a.level == AlertLevel::Warning));
    }

    #[test]
    fn every_alert_has_a_recommendation() {
        let alerts = evaluate(&reading(1600, 31.0, 2100), &Thresholds::default());

        for alert in alerts {
            let action = recommendation(alert.kind, alert.level);
            assert!(action.starts_with("IMMEDIATE") || action.starts_with("URGENT"));
        }
    }
}
